use pkastore::core::params::hbond::GapPolicy;

pub struct DefaultsConfig {
    pub gap_policy: GapPolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            gap_policy: GapPolicy::Reject,
        }
    }
}
