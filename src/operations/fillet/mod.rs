mod corner;
mod polyline;

pub use corner::{fillet_corner, CornerFillet, FilletArc, FilletCorner};
pub use polyline::{fillet_polyline, FilletPolyline};
