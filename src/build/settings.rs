/// Knobs for assembling a class tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Record, for each component that fails to attach, the frames it was offered to
    ///
    /// The trail shows up in [`super::PlacementError`] (innermost frame first) along with the
    /// reason each frame turned the component down. Turning it off only drops the trail: the
    /// unplaced components themselves are always reported.
    pub record_attempts: bool,
}

impl Settings {
    pub fn new() -> Settings {
        Settings {
            record_attempts: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings::new()
    }
}
