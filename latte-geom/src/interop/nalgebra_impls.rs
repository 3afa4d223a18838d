use nalgebra::{Point2, Point3};

use crate::position::{P2d, P3d, Position};

impl From<P2d> for Point2<f64> {
    fn from(value: P2d) -> Self {
        Point2::new(value.x(), value.y())
    }
}

impl From<Point2<f64>> for P2d {
    fn from(value: Point2<f64>) -> Self {
        P2d::new(value.x, value.y)
    }
}

impl From<P3d> for Point3<f64> {
    fn from(value: P3d) -> Self {
        Point3::new(value.x(), value.y(), value.z())
    }
}

impl From<Point3<f64>> for P3d {
    fn from(value: Point3<f64>) -> Self {
        P3d::new(value.x, value.y, value.z)
    }
}
