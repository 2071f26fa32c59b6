pub use crate::{
    ext::{ExtendFfiVector3, ExtendPhysics, ExtendVector3},
    pretty::PrettyPrint,
};
