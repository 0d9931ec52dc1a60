//! Colors for shapes and panels

use flatland_math::ShapeKind;

/// Fill and outline colors of one shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeStyle {
    /// Interior color
    pub fill: &'static str,
    /// Outline color
    pub stroke: &'static str,
}

impl ShapeStyle {
    pub const SPHERE: Self = Self {
        fill: "#4ADE80",
        stroke: "#166534",
    };

    pub const CUBE: Self = Self {
        fill: "#60A5FA",
        stroke: "#1E40AF",
    };

    pub const CONE: Self = Self {
        fill: "#A78BFA",
        stroke: "#5B21B6",
    };

    pub const TORUS: Self = Self {
        fill: "#F472B6",
        stroke: "#BE185D",
    };

    /// Style used for `shape` in every view
    pub fn for_shape(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Sphere => Self::SPHERE,
            ShapeKind::Cube => Self::CUBE,
            ShapeKind::Cone => Self::CONE,
            ShapeKind::Torus => Self::TORUS,
        }
    }
}

/// Panel and decoration colors
pub mod panel {
    /// Background of the world view
    pub const WORLD_BACKGROUND: &str = "#f8fafc";
    /// Background of the axis and flatland views; also fills the torus hole
    pub const SKY_BACKGROUND: &str = "#f0f9ff";
    /// Coordinate axes in the world view
    pub const AXIS: &str = "#000000";
    /// The plane, drawn dashed in the world view
    pub const PLANE: &str = "#EF4444";
    /// The hidden axis in the axis view
    pub const HIDDEN_AXIS: &str = "#3b82f6";
    /// Faint cross-hair in the flatland view
    pub const GRID: &str = "#9ca3af";
    /// Captions and axis labels
    pub const LABEL: &str = "#6b7280";
    /// Page background of the composite
    pub const PAGE: &str = "#ffffff";
    /// Panel border in the composite
    pub const BORDER: &str = "#e5e7eb";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_distinct_style() {
        let styles: Vec<ShapeStyle> = ShapeKind::ALL.iter().map(|s| ShapeStyle::for_shape(*s)).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.fill, b.fill);
            }
        }
    }
}
