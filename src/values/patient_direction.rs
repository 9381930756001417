//
// patient_direction.rs
// Dicom-Iod-rs
//
// Patient direction codes (Patient Orientation values) for biped and quadruped anatomy.
//
// Dicom-Iod-rs contributors - October 2026

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{IodError, Result};
use crate::modules::general_series::AnatomicalOrientationType;

/// One anatomical direction letter (or letter pair for quadrupeds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionComponent {
    Unspecified,
    Left,
    Right,
    Anterior,
    Posterior,
    Head,
    Foot,
    QuadrupedLeft,
    QuadrupedRight,
    Dorsal,
    Ventral,
    Cranial,
    Caudal,
    Rostral,
    Medial,
    Lateral,
    Proximal,
    Distal,
    Palmar,
    Plantar,
}

impl DirectionComponent {
    pub const BIPED: [DirectionComponent; 6] = [
        Self::Left,
        Self::Right,
        Self::Head,
        Self::Foot,
        Self::Posterior,
        Self::Anterior,
    ];

    pub const QUADRUPED: [DirectionComponent; 13] = [
        Self::QuadrupedLeft,
        Self::QuadrupedRight,
        Self::Dorsal,
        Self::Ventral,
        Self::Cranial,
        Self::Caudal,
        Self::Rostral,
        Self::Medial,
        Self::Lateral,
        Self::Proximal,
        Self::Distal,
        Self::Palmar,
        Self::Plantar,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Unspecified => "X",
            Self::Left => "L",
            Self::Right => "R",
            Self::Anterior => "A",
            Self::Posterior => "P",
            Self::Head => "H",
            Self::Foot => "F",
            Self::QuadrupedLeft => "LE",
            Self::QuadrupedRight => "RT",
            Self::Dorsal => "D",
            Self::Ventral => "V",
            Self::Cranial => "CR",
            Self::Caudal => "CD",
            Self::Rostral => "R",
            Self::Medial => "M",
            Self::Lateral => "L",
            Self::Proximal => "PR",
            Self::Distal => "DI",
            Self::Palmar => "PA",
            Self::Plantar => "PL",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unspecified => "Unspecified",
            Self::Left | Self::QuadrupedLeft => "Left",
            Self::Right | Self::QuadrupedRight => "Right",
            Self::Anterior => "Anterior",
            Self::Posterior => "Posterior",
            Self::Head => "Head",
            Self::Foot => "Foot",
            Self::Dorsal => "Dorsal",
            Self::Ventral => "Ventral",
            Self::Cranial => "Cranial",
            Self::Caudal => "Caudal",
            Self::Rostral => "Rostral",
            Self::Medial => "Medial",
            Self::Lateral => "Lateral",
            Self::Proximal => "Proximal",
            Self::Distal => "Distal",
            Self::Palmar => "Palmar",
            Self::Plantar => "Plantar",
        }
    }

    /// `None` for [`DirectionComponent::Unspecified`].
    pub fn orientation_type(self) -> Option<AnatomicalOrientationType> {
        match self {
            Self::Unspecified => None,
            Self::Left | Self::Right | Self::Anterior | Self::Posterior | Self::Head | Self::Foot => {
                Some(AnatomicalOrientationType::Biped)
            }
            _ => Some(AnatomicalOrientationType::Quadruped),
        }
    }

    /// Biped directions only; quadruped directions have no opposite.
    fn opposite_code(self) -> &'static str {
        match self {
            Self::Left => "R",
            Self::Right => "L",
            Self::Anterior => "P",
            Self::Posterior => "A",
            Self::Head => "F",
            Self::Foot => "H",
            _ => "X",
        }
    }
}

/// A Patient Orientation value: up to three direction components.
///
/// Parsing never fails outright. Codes that do not describe a direction give a
/// value whose [`PatientDirection::is_valid`] is false but which keeps the
/// original code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PatientDirection {
    code: String,
    orientation_type: Option<AnatomicalOrientationType>,
    components: Vec<DirectionComponent>,
}

impl PatientDirection {
    /// The empty direction.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn unspecified() -> Self {
        DirectionComponent::Unspecified.into()
    }

    /// Biped is assumed when no orientation type is given.
    pub fn parse(code: &str, orientation_type: Option<AnatomicalOrientationType>) -> Self {
        let orientation_type = orientation_type.unwrap_or(AnatomicalOrientationType::Biped);
        let components = match orientation_type {
            AnatomicalOrientationType::Quadruped => parse_quadruped(code),
            AnatomicalOrientationType::Biped => parse_biped(code),
        }
        .unwrap_or_default();
        let orientation_type = match components.first() {
            _ if code.is_empty() => None,
            Some(DirectionComponent::Unspecified) => None,
            _ => Some(orientation_type),
        };
        Self {
            code: code.to_string(),
            orientation_type,
            components,
        }
    }

    pub fn biped(code: &str) -> Self {
        Self::parse(code, Some(AnatomicalOrientationType::Biped))
    }

    pub fn quadruped(code: &str) -> Self {
        Self::parse(code, Some(AnatomicalOrientationType::Quadruped))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn orientation_type(&self) -> Option<AnatomicalOrientationType> {
        self.orientation_type
    }

    pub fn description(&self) -> String {
        self.components
            .iter()
            .map(|c| c.description())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn components(&self) -> &[DirectionComponent] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Component by 0-based position (primary, secondary, tertiary).
    pub fn component(&self, index: usize) -> Option<DirectionComponent> {
        self.components.get(index).copied()
    }

    pub fn primary(&self) -> Option<DirectionComponent> {
        self.component(0)
    }

    pub fn secondary(&self) -> Option<DirectionComponent> {
        self.component(1)
    }

    pub fn tertiary(&self) -> Option<DirectionComponent> {
        self.component(2)
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn is_unspecified(&self) -> bool {
        self.code == "X"
    }

    pub fn is_valid(&self) -> bool {
        !self.components.is_empty()
    }

    /// Each biped component reversed. Quadruped directions have no defined
    /// opposite and give the unspecified direction.
    pub fn opposing(&self) -> Self {
        if self.orientation_type == Some(AnatomicalOrientationType::Quadruped) {
            return Self::unspecified();
        }
        let code: String = self.components.iter().map(|c| c.opposite_code()).collect();
        Self::parse(&code, self.orientation_type)
    }

    /// Concatenates two directions, keeping the orientation type of `self`.
    ///
    /// Biped and quadruped directions cannot be mixed. The result may be
    /// invalid, for example when an unspecified component is combined with
    /// another one.
    pub fn concat(&self, other: &PatientDirection) -> Result<Self> {
        if let (Some(left), Some(right)) = (self.orientation_type, other.orientation_type) {
            if left != right {
                return Err(IodError::InvalidValue {
                    name: "PatientDirection",
                    value: format!("{} + {}", self.code, other.code),
                });
            }
        }
        Ok(Self::parse(
            &format!("{}{}", self.code, other.code),
            self.orientation_type,
        ))
    }
}

impl From<DirectionComponent> for PatientDirection {
    fn from(component: DirectionComponent) -> Self {
        Self {
            code: component.code().to_string(),
            orientation_type: component.orientation_type(),
            components: vec![component],
        }
    }
}

impl fmt::Display for PatientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Serialize for PatientDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

/// Single letters, at most three, no axis repeated (`L` and `R` share an axis).
fn parse_biped(code: &str) -> Option<Vec<DirectionComponent>> {
    if code == "X" {
        return Some(vec![DirectionComponent::Unspecified]);
    }
    if code.is_empty() || code.len() > 3 {
        return None;
    }
    let mut components = Vec::with_capacity(3);
    let mut axes = [false; 3];
    for letter in code.chars() {
        let (component, axis) = match letter {
            'L' => (DirectionComponent::Left, 0),
            'R' => (DirectionComponent::Right, 0),
            'A' => (DirectionComponent::Anterior, 1),
            'P' => (DirectionComponent::Posterior, 1),
            'H' => (DirectionComponent::Head, 2),
            'F' => (DirectionComponent::Foot, 2),
            _ => return None,
        };
        if std::mem::replace(&mut axes[axis], true) {
            return None;
        }
        components.push(component);
    }
    Some(components)
}

/// Greedy match of two-letter codes before single letters, at most three components.
fn parse_quadruped(code: &str) -> Option<Vec<DirectionComponent>> {
    if code == "X" {
        return Some(vec![DirectionComponent::Unspecified]);
    }
    if code.is_empty() || !code.is_ascii() {
        return None;
    }
    let bytes = code.as_bytes();
    let mut components = Vec::with_capacity(3);
    let mut position = 0;
    while position < bytes.len() {
        if components.len() >= 3 {
            return None;
        }
        let pair = (bytes[position], bytes.get(position + 1).copied());
        let (component, width) = match pair {
            (b'L', Some(b'E')) => (DirectionComponent::QuadrupedLeft, 2),
            (b'R', Some(b'T')) => (DirectionComponent::QuadrupedRight, 2),
            (b'C', Some(b'R')) => (DirectionComponent::Cranial, 2),
            (b'C', Some(b'D')) => (DirectionComponent::Caudal, 2),
            (b'D', Some(b'I')) => (DirectionComponent::Distal, 2),
            (b'P', Some(b'R')) => (DirectionComponent::Proximal, 2),
            (b'P', Some(b'A')) => (DirectionComponent::Palmar, 2),
            (b'P', Some(b'L')) => (DirectionComponent::Plantar, 2),
            (b'R', _) => (DirectionComponent::Rostral, 1),
            (b'L', _) => (DirectionComponent::Lateral, 1),
            (b'D', _) => (DirectionComponent::Dorsal, 1),
            (b'V', _) => (DirectionComponent::Ventral, 1),
            (b'M', _) => (DirectionComponent::Medial, 1),
            _ => return None,
        };
        components.push(component);
        position += width;
    }
    Some(components)
}
