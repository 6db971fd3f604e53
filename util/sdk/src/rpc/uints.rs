use serde::{
    de::{Error, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker, num};

pub trait Uint: Copy + fmt::LowerHex {
    const NAME: &'static str;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, num::ParseIntError>;
}

/// Unsigned integer encoded as a 0x-prefixed hex string without leading
/// zeros, e.g. `"0x0"` or `"0x10"`.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Debug)]
pub struct JsonUint<T: Uint>(T);

struct JsonUintVisitor<T: Uint>(marker::PhantomData<T>);

impl<T: Uint> JsonUint<T> {
    pub fn value(self) -> T {
        self.0
    }
}

impl<T: Uint> fmt::Display for JsonUint<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:x}", self.value())
    }
}

impl<T: Uint> From<T> for JsonUint<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Uint> Serialize for JsonUint<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<T: Uint> JsonUintVisitor<T> {
    fn expecting(formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a hex-encoded, 0x-prefixed {}", T::NAME)
    }

    fn visit_str<E>(value: &str) -> Result<JsonUint<T>, E>
    where
        E: Error,
    {
        let value_bytes = value.as_bytes();
        if value_bytes.len() < 3 || &value_bytes[..2] != b"0x" {
            return Err(Error::custom(format!(
                "Invalid {} {}: without `0x` prefix",
                T::NAME,
                value
            )));
        }
        if value_bytes[2] == b'0' && value_bytes.len() > 3 {
            return Err(Error::custom(format!(
                "Invalid {} {}: with redundant leading zeros",
                T::NAME,
                value,
            )));
        }

        let number = T::from_str_radix(&value[2..], 16)
            .map(JsonUint)
            .map_err(|e| Error::custom(format!("Invalid {} {}: {}", T::NAME, value, e)))?;
        if number.to_string() != value {
            return Err(Error::custom(format!(
                "Invalid {} {}: only digits and lowercases are allowed",
                T::NAME,
                value,
            )));
        }

        Ok(number)
    }
}

macro_rules! def_json_uint {
    ($alias:ident, $inner:ident, $visitor:ident) => {
        pub type $alias = JsonUint<$inner>;

        impl Uint for $inner {
            const NAME: &'static str = stringify!($alias);

            fn from_str_radix(src: &str, radix: u32) -> Result<Self, num::ParseIntError> {
                $inner::from_str_radix(src, radix)
            }
        }

        impl From<JsonUint<$inner>> for $inner {
            fn from(value: JsonUint<$inner>) -> Self {
                value.value()
            }
        }

        impl<'a> Deserialize<'a> for JsonUint<$inner> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'a>,
            {
                deserializer.deserialize_str($visitor)
            }
        }

        struct $visitor;

        impl<'a> Visitor<'a> for $visitor {
            type Value = JsonUint<$inner>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                JsonUintVisitor::<$inner>::expecting(formatter)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                JsonUintVisitor::<$inner>::visit_str(value)
            }
        }
    };
}

def_json_uint!(Uint32, u32, Uint32Visitor);
def_json_uint!(Uint64, u64, Uint64Visitor);
