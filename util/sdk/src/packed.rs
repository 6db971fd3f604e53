//! Molecule entities of the structures that get hashed or signed.
//!
//! The byte layout comes from the generated types of `ckb-gen-types`; this
//! module only converts the plain SDK types into them.

use ckb_gen_types::packed;

use crate::types::{
    CellDep, CellInput, CellOutput, DepType, OutPoint, Script, ScriptHashType, Transaction,
    WitnessArgs,
};

pub use ckb_gen_types::prelude::{Builder, Entity, Pack, Unpack};

impl From<ScriptHashType> for packed::Byte {
    fn from(value: ScriptHashType) -> packed::Byte {
        packed::Byte::new(value.as_byte())
    }
}

impl From<DepType> for packed::Byte {
    fn from(value: DepType) -> packed::Byte {
        packed::Byte::new(value.as_byte())
    }
}

impl Pack<packed::Script> for Script {
    fn pack(&self) -> packed::Script {
        packed::Script::new_builder()
            .code_hash(self.code_hash.pack())
            .hash_type(self.hash_type.into())
            .args(self.args.pack())
            .build()
    }
}

impl Pack<packed::OutPoint> for OutPoint {
    fn pack(&self) -> packed::OutPoint {
        packed::OutPoint::new_builder()
            .tx_hash(self.tx_hash.pack())
            .index(self.index.pack())
            .build()
    }
}

impl Pack<packed::CellInput> for CellInput {
    fn pack(&self) -> packed::CellInput {
        packed::CellInput::new_builder()
            .since(self.since.pack())
            .previous_output(self.previous_output.pack())
            .build()
    }
}

impl Pack<packed::CellDep> for CellDep {
    fn pack(&self) -> packed::CellDep {
        packed::CellDep::new_builder()
            .out_point(self.out_point.pack())
            .dep_type(self.dep_type.into())
            .build()
    }
}

impl Pack<packed::CellOutput> for CellOutput {
    fn pack(&self) -> packed::CellOutput {
        let type_ = self.type_.as_ref().map(|script| script.pack());
        packed::CellOutput::new_builder()
            .capacity(self.capacity.pack())
            .lock(self.lock.pack())
            .type_(packed::ScriptOpt::new_builder().set(type_).build())
            .build()
    }
}

impl Pack<packed::WitnessArgs> for WitnessArgs {
    fn pack(&self) -> packed::WitnessArgs {
        packed::WitnessArgs::new_builder()
            .lock(self.lock.pack())
            .input_type(self.input_type.pack())
            .output_type(self.output_type.pack())
            .build()
    }
}

impl Transaction {
    /// `RawTransaction`: every field except the witnesses.
    pub fn pack_raw(&self) -> packed::RawTransaction {
        let cell_deps = packed::CellDepVec::new_builder()
            .extend(self.cell_deps().iter().map(|dep| dep.pack()))
            .build();
        let header_deps = packed::Byte32Vec::new_builder()
            .extend(self.header_deps().iter().map(|hash| hash.pack()))
            .build();
        let inputs = packed::CellInputVec::new_builder()
            .extend(self.inputs().iter().map(|input| input.pack()))
            .build();
        let outputs = packed::CellOutputVec::new_builder()
            .extend(self.outputs().iter().map(|output| output.pack()))
            .build();
        let outputs_data = packed::BytesVec::new_builder()
            .extend(self.outputs_data().iter().map(|data| data.pack()))
            .build();
        packed::RawTransaction::new_builder()
            .version(self.version().pack())
            .cell_deps(cell_deps)
            .header_deps(header_deps)
            .inputs(inputs)
            .outputs(outputs)
            .outputs_data(outputs_data)
            .build()
    }
}

impl Pack<packed::Transaction> for Transaction {
    fn pack(&self) -> packed::Transaction {
        let witnesses = packed::BytesVec::new_builder()
            .extend(self.witnesses().iter().map(|witness| witness.pack()))
            .build();
        packed::Transaction::new_builder()
            .raw(self.pack_raw())
            .witnesses(witnesses)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::H256;

    #[test]
    fn fixed_size_structs() {
        let out_point = OutPoint::new(H256([1; 32]), 2);
        let packed_out_point: packed::OutPoint = out_point.pack();
        assert_eq!(packed_out_point.as_slice().len(), 36);
        let input = CellInput {
            since: 0,
            previous_output: out_point.clone(),
        };
        let packed_input: packed::CellInput = input.pack();
        assert_eq!(packed_input.as_slice().len(), 44);
        let dep = CellDep {
            out_point,
            dep_type: DepType::DepGroup,
        };
        let packed_dep: packed::CellDep = dep.pack();
        assert_eq!(packed_dep.as_slice().len(), 37);
        assert_eq!(packed_dep.as_slice()[36], 1);
    }

    #[test]
    fn script_table_layout() {
        let script = Script::new(
            H256([0xaa; 32]),
            ScriptHashType::Type,
            Bytes::from(vec![1, 2, 3]),
        );
        let entity: packed::Script = script.pack();
        let slice = entity.as_slice();
        // header 16 + code hash 32 + hash type 1 + args 4 + 3
        assert_eq!(slice.len(), 56);
        assert_eq!(&slice[0..4], &56u32.to_le_bytes()[..]);
        assert_eq!(&slice[4..8], &16u32.to_le_bytes()[..]);
        assert_eq!(&slice[8..12], &48u32.to_le_bytes()[..]);
        assert_eq!(&slice[12..16], &49u32.to_le_bytes()[..]);
        assert_eq!(slice[48], 1);
        assert_eq!(entity.code_hash().as_slice(), script.code_hash.as_bytes());
        assert_eq!(entity.args().raw_data(), script.args);
    }

    #[test]
    fn absent_type_script_is_empty() {
        let output = CellOutput {
            capacity: 100,
            lock: Script::default(),
            type_: None,
        };
        let entity: packed::CellOutput = output.pack();
        assert!(entity.type_().is_none());
    }

    #[test]
    fn witness_args_fields() {
        let witness = WitnessArgs::new_with_lock(Bytes::from(vec![0u8; 65]))
            .input_type(Some(Bytes::from_static(b"in")));
        let entity: packed::WitnessArgs = witness.pack();
        // header 16 + lock 4 + 65 + input type 4 + 2
        assert_eq!(entity.as_slice().len(), 91);
        assert_eq!(entity.lock().to_opt().map(|lock| lock.raw_data()), witness.lock);
        assert_eq!(
            entity.input_type().to_opt().map(|data| data.raw_data()),
            witness.input_type
        );
        assert!(entity.output_type().is_none());
    }
}
