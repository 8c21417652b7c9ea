/// Activity state of the controlled character.
///
/// Carried on every snapshot for filters outside the resource checks
/// (e.g. "only buff while standing"); the built-in checks ignore it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Status {
    /// Idle, weapon sheathed.
    #[default]
    Standing,
    /// Engaged with a target.
    Fighting,
    /// Resting to recover HP/MP.
    Healing,
    /// Riding a mount.
    Mounted,
    /// KO'd.
    Dead,
    /// Cutscene or zoning; no input accepted.
    Event,
    /// Status byte not recognised by the provider.
    Unknown,
}

impl Status {
    /// Returns true if the character can act at all in this state.
    pub const fn can_act(&self) -> bool {
        matches!(self, Self::Standing | Self::Fighting)
    }
}
