//! Feature slices: state, actions, and pure transformations per view.

pub mod campaigns;
