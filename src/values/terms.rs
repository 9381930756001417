//
// terms.rs
// Dicom-Iod-rs
//
// Enumerated values and defined terms (CS attributes) as Rust enums.
//
// Dicom-Iod-rs contributors - October 2026

use crate::error::IodError;

/// A CS value drawn from a closed list of DICOM terms.
pub trait DefinedTerm: Sized + Copy + 'static {
    /// Attribute name used in error messages.
    const NAME: &'static str;
    const ALL: &'static [Self];

    fn as_dicom_str(&self) -> &'static str;

    /// Unknown or empty strings yield `None`.
    fn from_dicom(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|term| term.as_dicom_str().eq_ignore_ascii_case(value))
    }
}

pub(crate) fn parse_term<T: DefinedTerm>(value: &str) -> Result<T, IodError> {
    T::from_dicom(value).ok_or_else(|| IodError::InvalidValue {
        name: T::NAME,
        value: value.to_string(),
    })
}

/// Declares an enum of DICOM terms with its string mapping.
macro_rules! defined_terms {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::values::DefinedTerm for $name {
            const NAME: &'static str = $label;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_dicom_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::IodError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::values::terms::parse_term(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::values::DefinedTerm::as_dicom_str(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::values::DefinedTerm::as_dicom_str(self))
            }
        }
    };
}

pub(crate) use defined_terms;

defined_terms! {
    /// YES / NO flags (Patient Identity Removed, Trim).
    pub enum YesNo ("YesNo") {
        Yes => "YES",
        No => "NO",
    }
}

defined_terms! {
    /// Single letter Y / N flags (Anchor Point Visibility, Graphic Filled).
    pub enum Flag ("Flag") {
        Y => "Y",
        N => "N",
    }
}
