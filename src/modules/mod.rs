//
// mod.rs
// Dicom-Iod-rs
//
// Typed IOD modules. Each one wraps an attribute provider: getters need
// `AttributeProvider`, setters need `AttributeProviderMut`.
//
// Dicom-Iod-rs contributors - October 2026

/// Declares a module wrapper struct over a provider.
macro_rules! iod_module {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<P> {
            provider: P,
        }

        impl<P> $name<P> {
            pub fn new(provider: P) -> Self {
                Self { provider }
            }

            pub fn provider(&self) -> &P {
                &self.provider
            }

            pub fn into_inner(self) -> P {
                self.provider
            }
        }
    };
}

pub mod breast_tomo;
pub mod film_box;
pub mod functional_groups;
pub mod general_series;
pub mod multi_frame_dimension;
pub mod overlay;
pub mod patient;
pub mod pet_series;
pub mod sop_common;

pub use breast_tomo::{BreastTomosynthesisAcquisitionModule, XRay3DAcquisition};
pub use film_box::{BasicFilmBoxModule, FilmSize, FilmSizeUnit, ImageDisplayFormat};
pub use functional_groups::{FunctionalGroup, MultiFrameFunctionalGroupsModule};
pub use general_series::GeneralSeriesModule;
pub use multi_frame_dimension::{DimensionIndex, MultiFrameDimensionModule};
pub use overlay::{OverlayPlane, OverlayPlaneModule, OverlaySubtype, OverlayType};
pub use patient::{PatientModule, PatientSex};
pub use pet_series::PetSeriesModule;
pub use sop_common::SopCommonModule;
