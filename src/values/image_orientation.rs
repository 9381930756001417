//
// image_orientation.rs
// Dicom-Iod-rs
//
// Image Orientation (Patient) direction cosines and the patient axes they point along.
//
// Dicom-Iod-rs contributors - October 2026

use std::fmt;

use serde::Serialize;

use crate::dataset::AttributeProvider;
use crate::error::{IodError, Result};
use crate::tags;
use crate::values::patient_direction::{DirectionComponent, PatientDirection};

/// A patient axis in the DICOM patient coordinate system (LPH positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AxisDirection {
    None,
    Left,
    Right,
    Posterior,
    Anterior,
    Head,
    Foot,
}

impl AxisDirection {
    fn from_cosine(index: usize, cosine: f64) -> Self {
        if cosine.abs() <= f64::from(f32::EPSILON) {
            return Self::None;
        }
        match (index, cosine > 0.0) {
            (0, true) => Self::Left,
            (0, false) => Self::Right,
            (1, true) => Self::Posterior,
            (1, false) => Self::Anterior,
            (2, true) => Self::Head,
            _ => Self::Foot,
        }
    }

    fn axis(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Left | Self::Right => Some(0),
            Self::Posterior | Self::Anterior => Some(1),
            Self::Head | Self::Foot => Some(2),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Posterior => Self::Anterior,
            Self::Anterior => Self::Posterior,
            Self::Head => Self::Foot,
            Self::Foot => Self::Head,
        }
    }

    fn oriented(self, opposite: bool) -> Self {
        if opposite {
            self.opposite()
        } else {
            self
        }
    }

    pub fn to_patient_direction(self) -> PatientDirection {
        match self {
            Self::None => PatientDirection::empty(),
            Self::Left => DirectionComponent::Left.into(),
            Self::Right => DirectionComponent::Right.into(),
            Self::Posterior => DirectionComponent::Posterior.into(),
            Self::Anterior => DirectionComponent::Anterior.into(),
            Self::Head => DirectionComponent::Head.into(),
            Self::Foot => DirectionComponent::Foot.into(),
        }
    }
}

/// Row and column patient directions, as stored in Patient Orientation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PatientOrientation {
    pub row: PatientDirection,
    pub column: PatientDirection,
}

impl fmt::Display for PatientOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\\{}", self.row, self.column)
    }
}

/// Row and column direction cosines of the first pixel row and column.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ImageOrientationPatient {
    pub row: [f64; 3],
    pub column: [f64; 3],
}

impl ImageOrientationPatient {
    pub const AXIAL_RIGHT: Self = Self::new([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    pub const AXIAL_LEFT: Self = Self::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    pub const SAGITTAL_POSTERIOR: Self = Self::new([0.0, 1.0, 0.0], [0.0, 0.0, -1.0]);
    pub const SAGITTAL_ANTERIOR: Self = Self::new([0.0, -1.0, 0.0], [0.0, 0.0, -1.0]);
    pub const CORONAL_RIGHT: Self = Self::new([-1.0, 0.0, 0.0], [0.0, 0.0, -1.0]);
    pub const CORONAL_LEFT: Self = Self::new([1.0, 0.0, 0.0], [0.0, 0.0, -1.0]);

    pub const fn new(row: [f64; 3], column: [f64; 3]) -> Self {
        Self { row, column }
    }

    /// Exactly six values are required.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match values {
            &[rx, ry, rz, cx, cy, cz] => Some(Self::new([rx, ry, rz], [cx, cy, cz])),
            _ => None,
        }
    }

    /// Parses a backslash separated DS value.
    pub fn parse(value: &str) -> Option<Self> {
        let values = value
            .split('\\')
            .map(|v| v.trim().parse().ok())
            .collect::<Option<Vec<f64>>>()?;
        Self::from_values(&values)
    }

    /// Reads Image Orientation (Patient) from a data set or functional group item.
    pub fn from_provider<P: AttributeProvider + ?Sized>(provider: &P) -> Option<Self> {
        Self::from_values(&provider.get_f64s(tags::IMAGE_ORIENTATION_PATIENT))
    }

    pub fn to_values(&self) -> [f64; 6] {
        let [rx, ry, rz] = self.row;
        let [cx, cy, cz] = self.column;
        [rx, ry, rz, cx, cy, cz]
    }

    /// True when either cosine vector is all zeros.
    pub fn is_null(&self) -> bool {
        self.row.iter().all(|&c| c == 0.0) || self.column.iter().all(|&c| c == 0.0)
    }

    pub fn primary_row_direction(&self, opposite: bool) -> AxisDirection {
        ranked(&self.row)[0].oriented(opposite)
    }

    pub fn secondary_row_direction(&self, opposite: bool) -> AxisDirection {
        ranked(&self.row)[1].oriented(opposite)
    }

    pub fn primary_column_direction(&self, opposite: bool) -> AxisDirection {
        ranked(&self.column)[0].oriented(opposite)
    }

    pub fn secondary_column_direction(&self, opposite: bool) -> AxisDirection {
        ranked(&self.column)[1].oriented(opposite)
    }

    /// Like [`Self::secondary_row_direction`], but `None` when the secondary
    /// axis is within `degrees_tolerance` (0 to 10) of being perpendicular.
    pub fn secondary_row_direction_within(
        &self,
        opposite: bool,
        degrees_tolerance: f64,
    ) -> Result<AxisDirection> {
        secondary_within(&self.row, opposite, degrees_tolerance)
    }

    pub fn secondary_column_direction_within(
        &self,
        opposite: bool,
        degrees_tolerance: f64,
    ) -> Result<AxisDirection> {
        secondary_within(&self.column, opposite, degrees_tolerance)
    }

    /// Row and column directions from the two dominant axes of each cosine.
    pub fn to_patient_orientation(&self) -> Option<PatientOrientation> {
        if self.is_null() {
            return None;
        }
        let direction = |cosines: &[f64; 3]| {
            let [primary, secondary, _] = ranked(cosines);
            let code = format!(
                "{}{}",
                primary.to_patient_direction(),
                secondary.to_patient_direction()
            );
            PatientDirection::biped(&code)
        };
        Some(PatientOrientation {
            row: direction(&self.row),
            column: direction(&self.column),
        })
    }

    pub fn equals_within_tolerance(&self, other: &Self, tolerance: f64) -> bool {
        self.to_values()
            .iter()
            .zip(other.to_values())
            .all(|(a, b)| (a - b).abs() < tolerance)
    }
}

impl fmt::Display for ImageOrientationPatient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.to_values().iter().map(|v| v.to_string()).collect();
        f.write_str(&values.join("\\"))
    }
}

/// Axis directions ordered by decreasing cosine magnitude; ties keep axis order.
fn ranked(cosines: &[f64; 3]) -> [AxisDirection; 3] {
    let mut order = [0, 1, 2];
    order.sort_by(|&a, &b| cosines[b].abs().total_cmp(&cosines[a].abs()));
    order.map(|index| AxisDirection::from_cosine(index, cosines[index]))
}

fn secondary_within(cosines: &[f64; 3], opposite: bool, degrees_tolerance: f64) -> Result<AxisDirection> {
    if !(0.0..=10.0).contains(&degrees_tolerance) {
        return Err(IodError::InvalidValue {
            name: "degrees_tolerance",
            value: degrees_tolerance.to_string(),
        });
    }
    let secondary = ranked(cosines)[1];
    let Some(axis) = secondary.axis() else {
        return Ok(AxisDirection::None);
    };
    let angle_from_perpendicular = 90.0 - cosines[axis].abs().acos().to_degrees();
    if angle_from_perpendicular < degrees_tolerance {
        return Ok(AxisDirection::None);
    }
    Ok(secondary.oriented(opposite))
}
