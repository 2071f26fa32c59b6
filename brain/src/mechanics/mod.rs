//! Direct-control helpers. These write straight into the controller instead
//! of going through the routine stack.

pub use self::drive::{default_pd, default_throttle, drive_towards, steer_pd};

mod drive;
