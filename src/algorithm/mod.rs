/// Priority-ordered index of candidate cells
pub mod candidates;
/// Placement engine owning the map state
pub mod engine;
/// Map generation driver
pub mod executor;
/// Placement descriptors
pub mod placement;
/// Candidate scan and placement choice
pub mod selection;
/// River continuity rule
pub mod validation;
