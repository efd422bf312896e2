//! Typed, assert-or-fail access to captured contract state.
//!
//! Every read either returns a value of the requested shape or fails with
//! `MissingValue` / `TypeMismatch`. Nothing is coerced: an absent array is
//! not an empty array.

use govlens_core::constants::CONSTRUCTOR_ARGS_KEY;
use govlens_core::errors::{AnalysisError, ValueError};
use govlens_core::snapshot::ContractRecord;
use govlens_core::types::{Address, Value, ValueShape};

use crate::registry::ContractRegistry;

#[derive(Clone, Copy)]
pub struct ValueAccessor<'a> {
    registry: &'a ContractRegistry,
}

impl<'a> ValueAccessor<'a> {
    pub fn new(registry: &'a ContractRegistry) -> Self {
        Self { registry }
    }

    /// Read a named value of the contract identified by `contract_id`.
    pub fn value(&self, contract_id: &str, key: &str) -> Result<&'a Value, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        contract
            .values
            .get(key)
            .ok_or_else(|| self.missing(contract, key).into())
    }

    pub fn address_value(&self, contract_id: &str, key: &str) -> Result<Address, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        let value = self.value(contract_id, key)?;
        Ok(self.expect_address(contract, key, value)?)
    }

    pub fn array_value(&self, contract_id: &str, key: &str) -> Result<&'a [Value], AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        let value = self.value(contract_id, key)?;
        value
            .as_array()
            .ok_or_else(|| self.mismatch(contract, key, ValueShape::Array, value).into())
    }

    /// Read a non-negative integer value. Fractional or negative numbers are
    /// a `TypeMismatch`; on-chain quantities never take that form.
    pub fn number_value(&self, contract_id: &str, key: &str) -> Result<u64, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        let value = self.value(contract_id, key)?;
        Ok(self.expect_number(contract, key, value)?)
    }

    pub fn string_value(&self, contract_id: &str, key: &str) -> Result<&'a str, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        let value = self.value(contract_id, key)?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(contract, key, ValueShape::String, value).into())
    }

    /// Read a parameter of the contract's upgrade mechanism (`admin`,
    /// `implementation`, `upgradeDelay`, ...). Fails with `MissingValue` when
    /// the active mechanism has no such parameter.
    pub fn upgrade_param(&self, contract_id: &str, key: &str) -> Result<Value, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        contract.upgradeability.param(key).ok_or_else(|| {
            tracing::debug!(
                contract = %contract.name,
                kind = contract.upgradeability.kind(),
                key,
                "upgrade parameter not defined for mechanism"
            );
            self.missing(contract, &upgrade_key(key)).into()
        })
    }

    pub fn upgrade_param_address(
        &self,
        contract_id: &str,
        key: &str,
    ) -> Result<Address, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        let value = self.upgrade_param(contract_id, key)?;
        Ok(self.expect_address(contract, &upgrade_key(key), &value)?)
    }

    pub fn upgrade_param_number(&self, contract_id: &str, key: &str) -> Result<u64, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        let value = self.upgrade_param(contract_id, key)?;
        Ok(self.expect_number(contract, &upgrade_key(key), &value)?)
    }

    /// Read the `index`-th constructor argument.
    pub fn constructor_arg(&self, contract_id: &str, index: usize) -> Result<&'a Value, AnalysisError> {
        let contract = self.registry.resolve(contract_id)?;
        let args = self.array_value(contract_id, CONSTRUCTOR_ARGS_KEY)?;
        args.get(index).ok_or_else(|| {
            self.missing(contract, &format!("{CONSTRUCTOR_ARGS_KEY}[{index}]"))
                .into()
        })
    }

    pub(crate) fn expect_address(
        &self,
        contract: &ContractRecord,
        key: &str,
        value: &Value,
    ) -> Result<Address, ValueError> {
        value
            .as_address()
            .ok_or_else(|| self.mismatch(contract, key, ValueShape::Address, value))
    }

    fn expect_number(
        &self,
        contract: &ContractRecord,
        key: &str,
        value: &Value,
    ) -> Result<u64, ValueError> {
        value
            .as_number()
            .and_then(serde_json::Number::as_u64)
            .ok_or_else(|| self.mismatch(contract, key, ValueShape::Number, value))
    }

    pub(crate) fn missing(&self, contract: &ContractRecord, key: &str) -> ValueError {
        ValueError::MissingValue {
            contract: contract.name.clone(),
            key: key.to_string(),
            project: self.registry.project().to_string(),
        }
    }

    pub(crate) fn mismatch(
        &self,
        contract: &ContractRecord,
        key: &str,
        expected: ValueShape,
        found: &Value,
    ) -> ValueError {
        ValueError::TypeMismatch {
            contract: contract.name.clone(),
            key: key.to_string(),
            expected,
            found: found.shape(),
            project: self.registry.project().to_string(),
        }
    }
}

fn upgrade_key(key: &str) -> String {
    format!("upgradeability.{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use govlens_core::snapshot::Snapshot;
    use govlens_core::types::upgradeability::AdminProxy;
    use govlens_core::types::Upgradeability;

    fn addr(n: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[19] = n;
        Address::from_bytes(bytes)
    }

    fn registry() -> ContractRegistry {
        let vault = ContractRecord::new(
            "Vault",
            addr(1),
            Upgradeability::Eip1967Proxy(AdminProxy {
                admin: addr(2),
                implementation: addr(3),
            }),
        )
        .with_value("owner", addr(4))
        .with_value("threshold", 3u64)
        .with_value("name", "Vault v2")
        .with_value(
            "constructorArgs",
            Value::Array(vec![Value::from(addr(5)), Value::from(86_400u64)]),
        );
        ContractRegistry::new(Snapshot::new("test", vec![vault], []))
    }

    #[test]
    fn test_upgrade_type_tag_is_readable() {
        let registry = registry();
        let values = ValueAccessor::new(&registry);
        assert_eq!(
            values.upgrade_param("Vault", "type").unwrap(),
            Value::String("EIP1967 proxy".to_string())
        );
        assert_eq!(values.upgrade_param_address("Vault", "admin").unwrap(), addr(2));
    }

    #[test]
    fn test_typed_reads() {
        let registry = registry();
        let values = ValueAccessor::new(&registry);
        assert_eq!(values.address_value("Vault", "owner").unwrap(), addr(4));
        assert_eq!(values.number_value("Vault", "threshold").unwrap(), 3);
        assert_eq!(values.string_value("Vault", "name").unwrap(), "Vault v2");
        assert_eq!(values.constructor_arg("Vault", 1).unwrap(), &Value::from(86_400u64));
    }

    #[test]
    fn test_missing_value_is_error() {
        let registry = registry();
        let values = ValueAccessor::new(&registry);
        match values.value("Vault", "guardian") {
            Err(AnalysisError::Value(ValueError::MissingValue { key, .. })) => {
                assert_eq!(key, "guardian")
            }
            other => panic!("expected MissingValue, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_mismatch_is_error_not_coercion() {
        let registry = registry();
        let values = ValueAccessor::new(&registry);
        match values.array_value("Vault", "owner") {
            Err(AnalysisError::Value(ValueError::TypeMismatch { expected, found, .. })) => {
                assert_eq!(expected, ValueShape::Array);
                assert_eq!(found, ValueShape::Address);
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
        assert!(values.address_value("Vault", "threshold").is_err());
    }

    #[test]
    fn test_upgrade_params() {
        let registry = registry();
        let values = ValueAccessor::new(&registry);
        assert_eq!(values.upgrade_param_address("Vault", "admin").unwrap(), addr(2));
        match values.upgrade_param("Vault", "upgradeDelay") {
            Err(AnalysisError::Value(ValueError::MissingValue { key, .. })) => {
                assert_eq!(key, "upgradeability.upgradeDelay")
            }
            other => panic!("expected MissingValue, got {other:?}"),
        }
    }

    #[test]
    fn test_constructor_arg_out_of_range() {
        let registry = registry();
        let values = ValueAccessor::new(&registry);
        match values.constructor_arg("Vault", 7) {
            Err(AnalysisError::Value(ValueError::MissingValue { key, .. })) => {
                assert_eq!(key, "constructorArgs[7]")
            }
            other => panic!("expected MissingValue, got {other:?}"),
        }
    }
}
