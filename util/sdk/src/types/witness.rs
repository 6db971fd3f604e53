use bytes::Bytes;

use ckb_gen_types::packed;

use crate::error::Result;
use crate::packed::Entity;

/// Structured witness payload.
///
/// The lock field carries the signature, the other two are free for the
/// input's and output's type scripts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WitnessArgs {
    pub lock: Option<Bytes>,
    pub input_type: Option<Bytes>,
    pub output_type: Option<Bytes>,
}

impl WitnessArgs {
    pub fn new_with_lock(lock: Bytes) -> Self {
        WitnessArgs {
            lock: Some(lock),
            ..Default::default()
        }
    }

    pub fn lock(mut self, lock: Option<Bytes>) -> Self {
        self.lock = lock;
        self
    }

    pub fn input_type(mut self, input_type: Option<Bytes>) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn output_type(mut self, output_type: Option<Bytes>) -> Self {
        self.output_type = output_type;
        self
    }

    /// Parses a serialized witness, e.g. one written by the signer.
    ///
    /// Trailing fields appended by a newer schema are accepted and dropped.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let witness = packed::WitnessArgs::from_compatible_slice(slice)?;
        Ok(WitnessArgs {
            lock: witness.lock().to_opt().map(|lock| lock.raw_data()),
            input_type: witness.input_type().to_opt().map(|data| data.raw_data()),
            output_type: witness.output_type().to_opt().map(|data| data.raw_data()),
        })
    }
}
