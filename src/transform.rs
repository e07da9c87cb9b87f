/// Number of layout units per unit of camera distance.
///
/// Camera distance follows the graphics-layer convention of being expressed in
/// inches at 72 units per inch, so the default distance of 30 puts the camera
/// 2160 units away from the card.
pub const CAMERA_DISTANCE_UNIT: f32 = 72.0;

/// Axis and direction of the flip rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlipAnimationType {
    /// Rotates horizontally (about the vertical axis), clockwise
    #[default]
    HorizontalClockwise,
    /// Rotates horizontally (about the vertical axis), anti-clockwise
    HorizontalAntiClockwise,
    /// Rotates vertically (about the horizontal axis), clockwise
    VerticalClockwise,
    /// Rotates vertically (about the horizontal axis), anti-clockwise
    VerticalAntiClockwise,
}

impl FlipAnimationType {
    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            FlipAnimationType::HorizontalClockwise | FlipAnimationType::HorizontalAntiClockwise
        )
    }

    pub fn is_clockwise(self) -> bool {
        matches!(
            self,
            FlipAnimationType::HorizontalClockwise | FlipAnimationType::VerticalClockwise
        )
    }

    /// Map a signed face rotation onto `(rotation_x, rotation_y)` in degrees.
    pub fn axis_rotation(self, rotation: f32) -> (f32, f32) {
        match self {
            FlipAnimationType::HorizontalClockwise => (0.0, rotation),
            FlipAnimationType::HorizontalAntiClockwise => (0.0, -rotation),
            FlipAnimationType::VerticalClockwise => (rotation, 0.0),
            FlipAnimationType::VerticalAntiClockwise => (-rotation, 0.0),
        }
    }
}

/// A 4x4 transformation matrix stored in row-major order.
///
/// Faces are flat, so points enter at z = 0 and the result is projected back
/// to 2D with a perspective divide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix data in row-major order: [row0, row1, row2, row3]
    pub data: [f32; 16],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, x, // row 0
                0.0, 1.0, 0.0, y, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Rotation about the horizontal (X) axis.
    /// Positive angles tip the bottom edge towards the viewer.
    pub fn rotate_x_degrees(angle_degrees: f32) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // row 0
                0.0, cos, -sin, 0.0, // row 1
                0.0, sin, cos, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Rotation about the vertical (Y) axis.
    /// Positive angles turn the right edge away from the viewer.
    pub fn rotate_y_degrees(angle_degrees: f32) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self {
            data: [
                cos, 0.0, sin, 0.0, // row 0
                0.0, 1.0, 0.0, 0.0, // row 1
                -sin, 0.0, cos, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Perspective projection for a camera `distance` layout units in front
    /// of the z = 0 plane.
    pub fn perspective(distance: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // row 0
                0.0, 1.0, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, -1.0 / distance, 1.0, // row 3
            ],
        }
    }

    /// Transform for one face of a card laid out in a box with centre
    /// `(center_x, center_y)`: rotate about the centre, then project.
    pub fn face(
        center_x: f32,
        center_y: f32,
        rotation_x: f32,
        rotation_y: f32,
        camera_distance: f32,
    ) -> Self {
        Self::translate(center_x, center_y)
            .then(&Self::perspective(camera_distance * CAMERA_DISTANCE_UNIT))
            .then(&Self::rotate_x_degrees(rotation_x))
            .then(&Self::rotate_y_degrees(rotation_y))
            .then(&Self::translate(-center_x, -center_y))
    }

    /// Compose this transform with another: self * other
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let a = &self.data;
        let b = &other.data;

        let mut result = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[i * 4 + k] * b[k * 4 + j];
                }
                result[i * 4 + j] = sum;
            }
        }

        Transform { data: result }
    }

    /// Transform a point on the z = 0 plane and project it back to 2D.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let d = &self.data;
        let new_x = d[0] * x + d[1] * y + d[3];
        let new_y = d[4] * x + d[5] * y + d[7];
        let w = d[12] * x + d[13] * y + d[15];
        if w.abs() < 1e-6 {
            return (new_x, new_y);
        }
        (new_x / w, new_y / w)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
