/// Declares a JSON-RPC 2.0 client whose methods are named after the remote
/// methods. Every call posts one request and decodes the `result` field into
/// the declared return type.
macro_rules! jsonrpc {
    (
        $(#[$struct_attr:meta])*
        pub struct $struct_name:ident {$(
            $(#[$attr:meta])*
            pub fn $method:ident(&$selff:ident $(, $arg_name:ident: $arg_ty:ty)*)
                -> $return_ty:ty;
        )*}
    ) => (
        $(#[$struct_attr])*
        pub struct $struct_name {
            client: &'static reqwest::blocking::Client,
            url: reqwest::Url,
            id_generator: $crate::rpc::id_generator::IdGenerator,
        }

        impl $struct_name {
            pub fn new(uri: &str) -> $crate::error::Result<Self> {
                let url = reqwest::Url::parse(uri).map_err(|err| {
                    $crate::error::Error::Config(format!(
                        "invalid rpc url {}, e.g. \"http://127.0.0.1:8114\": {}",
                        uri, err
                    ))
                })?;
                let id_generator = $crate::rpc::id_generator::IdGenerator::new();
                Ok($struct_name { url, id_generator, client: &$crate::rpc::HTTP_CLIENT })
            }

            pub fn url(&self) -> &reqwest::Url {
                &self.url
            }

            $(
                $(#[$attr])*
                pub fn $method(&$selff $(, $arg_name: $arg_ty)*) -> $crate::error::Result<$return_ty> {
                    let method = String::from(stringify!($method));
                    let params = serialize_parameters!($($arg_name,)*);
                    let id = $selff.id_generator.next();
                    log::trace!("rpc request {}: {}", id, method);

                    let mut req_json = serde_json::Map::new();
                    req_json.insert("id".to_owned(), serde_json::json!(id));
                    req_json.insert("jsonrpc".to_owned(), serde_json::json!("2.0"));
                    req_json.insert("method".to_owned(), serde_json::json!(method));
                    req_json.insert("params".to_owned(), params);

                    let resp = $selff.client.post($selff.url.clone()).json(&req_json).send()?;
                    let output = resp.json::<$crate::rpc::types::Output>()?;
                    match output {
                        $crate::rpc::types::Output::Success(success) => {
                            serde_json::from_value(success.result).map_err(Into::into)
                        },
                        $crate::rpc::types::Output::Failure(failure) => {
                            Err(failure.error.into())
                        }
                    }
                }
            )*
        }
    )
}

macro_rules! serialize_parameters {
    () => ( serde_json::Value::Array(Vec::new()) );
    ($($arg_name:ident,)+) => ( serde_json::to_value(($($arg_name,)+))?)
}
