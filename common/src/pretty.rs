use nalgebra::Vector3;
use std::fmt::{self, Formatter};

pub trait PrettyPrint {
    type PrettyPrinter: fmt::Display;
    fn pretty(&self) -> Self::PrettyPrinter;
}

impl PrettyPrint for Vector3<f32> {
    type PrettyPrinter = Vector3PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct Vector3PrettyPrinter {
    data: Vector3<f32>,
}

impl fmt::Display for Vector3PrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "({:.0}, {:.0}, {:.0})",
            self.data.x, self.data.y, self.data.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::PrettyPrint;
    use nalgebra::Vector3;

    #[test]
    fn rounds_to_whole_units() {
        let v = Vector3::new(1.4, -2.6, 3072.0);
        assert_eq!(format!("{}", v.pretty()), "(1, -3, 3072)");
    }
}
