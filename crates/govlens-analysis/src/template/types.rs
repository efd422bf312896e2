//! Description template types.

/// Where the subject of a permission template lives: the address held in
/// `value` on `contract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSource {
    pub contract: &'static str,
    pub value: &'static str,
}

/// One element of a placeholder's argument group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSource {
    /// Role name looked up in the inversion graph.
    pub role: &'static str,
    /// false: contracts on which the subject holds `role`.
    /// true: entries holding `role` on the contract named after the template.
    pub reverse: bool,
}

impl ArgumentSource {
    pub const fn forward(role: &'static str) -> Self {
        Self { role, reverse: false }
    }

    pub const fn reverse(role: &'static str) -> Self {
        Self { role, reverse: true }
    }
}

/// A permission description rendered against the inversion graph.
/// Group `n` of `argument_sources` fills placeholder `{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionTemplate {
    pub name: &'static str,
    pub source: ValueSource,
    pub description: &'static str,
    pub argument_sources: &'static [&'static [ArgumentSource]],
}

/// A contract description whose `{0}` is the contract's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractDescriptionTemplate {
    pub name: &'static str,
    pub core_description: &'static str,
}
