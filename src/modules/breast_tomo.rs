//
// breast_tomo.rs
// Dicom-Iod-rs
//
// Breast Tomosynthesis Acquisition module (C.8.21.3): the X-Ray 3D Acquisition Sequence.
//
// Dicom-Iod-rs contributors - October 2026

use chrono::NaiveDateTime;
use dicom::core::{Tag, VR};
use dicom::object::InMemDicomObject;
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{IodError, Result};
use crate::tags;
use crate::values::datetime::{get_dt, put_dt};
use crate::values::YesNo;

/// One item of the X-Ray 3D Acquisition Sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct XRay3DAcquisition {
    /// RECTANGLE, ROUND, HEXAGONAL ...; required.
    pub field_of_view_shape: String,
    pub field_of_view_origin: Option<[f64; 2]>,
    pub field_of_view_rotation: Option<f64>,
    pub field_of_view_horizontal_flip: Option<YesNo>,
    pub grid: Vec<String>,
    pub kvp: Option<f64>,
    pub x_ray_tube_current_in_ma: Option<f64>,
    pub exposure_time_in_ms: Option<f64>,
    pub exposure_in_mas: Option<f64>,
    pub start_acquisition_date_time: Option<NaiveDateTime>,
    pub end_acquisition_date_time: Option<NaiveDateTime>,
    pub primary_positioner_scan_arc: Option<f64>,
    pub primary_positioner_scan_start_angle: Option<f64>,
    pub primary_positioner_increment: Option<f64>,
    pub secondary_positioner_scan_arc: Option<f64>,
    pub secondary_positioner_scan_start_angle: Option<f64>,
    pub secondary_positioner_increment: Option<f64>,
    pub distance_source_to_detector: Option<f64>,
    pub distance_source_to_patient: Option<f64>,
    pub anode_target_material: Option<String>,
    pub body_part_thickness: Option<f64>,
    pub filter_type: Option<String>,
    pub filter_material: Vec<String>,
}

/// Numeric attributes of an item, with the VR each is written as.
const NUMERIC: [(Tag, VR); 13] = [
    (tags::FIELD_OF_VIEW_ROTATION, VR::DS),
    (tags::KVP, VR::DS),
    (tags::X_RAY_TUBE_CURRENT_IN_MA, VR::FD),
    (tags::EXPOSURE_TIME_IN_MS, VR::FD),
    (tags::EXPOSURE_IN_MAS, VR::FD),
    (tags::PRIMARY_POSITIONER_SCAN_ARC, VR::FD),
    (tags::PRIMARY_POSITIONER_SCAN_START_ANGLE, VR::FD),
    (tags::PRIMARY_POSITIONER_INCREMENT, VR::FD),
    (tags::SECONDARY_POSITIONER_SCAN_ARC, VR::FD),
    (tags::SECONDARY_POSITIONER_SCAN_START_ANGLE, VR::FD),
    (tags::SECONDARY_POSITIONER_INCREMENT, VR::FD),
    (tags::DISTANCE_SOURCE_TO_DETECTOR, VR::DS),
    (tags::DISTANCE_SOURCE_TO_PATIENT, VR::DS),
];

impl XRay3DAcquisition {
    fn numeric_fields(&self) -> [Option<f64>; 13] {
        [
            self.field_of_view_rotation,
            self.kvp,
            self.x_ray_tube_current_in_ma,
            self.exposure_time_in_ms,
            self.exposure_in_mas,
            self.primary_positioner_scan_arc,
            self.primary_positioner_scan_start_angle,
            self.primary_positioner_increment,
            self.secondary_positioner_scan_arc,
            self.secondary_positioner_scan_start_angle,
            self.secondary_positioner_increment,
            self.distance_source_to_detector,
            self.distance_source_to_patient,
        ]
    }

    pub fn from_item(item: &InMemDicomObject) -> Self {
        let number = |tag| item.get_f64(tag);
        Self {
            field_of_view_shape: item.get_string(tags::FIELD_OF_VIEW_SHAPE).unwrap_or_default(),
            field_of_view_origin: item
                .get_f64_at(tags::FIELD_OF_VIEW_ORIGIN, 0)
                .zip(item.get_f64_at(tags::FIELD_OF_VIEW_ORIGIN, 1))
                .map(|(row, column)| [row, column]),
            field_of_view_rotation: number(tags::FIELD_OF_VIEW_ROTATION),
            field_of_view_horizontal_flip: item.get_term(tags::FIELD_OF_VIEW_HORIZONTAL_FLIP),
            grid: item.get_strings(tags::GRID),
            kvp: number(tags::KVP),
            x_ray_tube_current_in_ma: number(tags::X_RAY_TUBE_CURRENT_IN_MA),
            exposure_time_in_ms: number(tags::EXPOSURE_TIME_IN_MS),
            exposure_in_mas: number(tags::EXPOSURE_IN_MAS),
            start_acquisition_date_time: get_dt(item, tags::START_ACQUISITION_DATE_TIME),
            end_acquisition_date_time: get_dt(item, tags::END_ACQUISITION_DATE_TIME),
            primary_positioner_scan_arc: number(tags::PRIMARY_POSITIONER_SCAN_ARC),
            primary_positioner_scan_start_angle: number(tags::PRIMARY_POSITIONER_SCAN_START_ANGLE),
            primary_positioner_increment: number(tags::PRIMARY_POSITIONER_INCREMENT),
            secondary_positioner_scan_arc: number(tags::SECONDARY_POSITIONER_SCAN_ARC),
            secondary_positioner_scan_start_angle: number(
                tags::SECONDARY_POSITIONER_SCAN_START_ANGLE,
            ),
            secondary_positioner_increment: number(tags::SECONDARY_POSITIONER_INCREMENT),
            distance_source_to_detector: number(tags::DISTANCE_SOURCE_TO_DETECTOR),
            distance_source_to_patient: number(tags::DISTANCE_SOURCE_TO_PATIENT),
            anode_target_material: item.get_string(tags::ANODE_TARGET_MATERIAL),
            body_part_thickness: number(tags::BODY_PART_THICKNESS),
            filter_type: item.get_string(tags::FILTER_TYPE),
            filter_material: item.get_strings(tags::FILTER_MATERIAL),
        }
    }

    pub fn to_item(&self) -> Result<InMemDicomObject> {
        let mut item = InMemDicomObject::new_empty();
        item.put_required_string(
            tags::FIELD_OF_VIEW_SHAPE,
            VR::CS,
            "FieldOfViewShape",
            &self.field_of_view_shape,
        )?;
        if let Some(origin) = self.field_of_view_origin {
            item.put_f64s(tags::FIELD_OF_VIEW_ORIGIN, VR::DS, &origin);
        }
        for ((tag, vr), value) in NUMERIC.into_iter().zip(self.numeric_fields()) {
            if let Some(value) = value {
                item.put_f64(tag, vr, value);
            }
        }
        item.put_term_or_remove(
            tags::FIELD_OF_VIEW_HORIZONTAL_FLIP,
            self.field_of_view_horizontal_flip,
        );
        if !self.grid.is_empty() {
            item.put_strings(tags::GRID, VR::CS, &self.grid);
        }
        put_dt(
            &mut item,
            tags::START_ACQUISITION_DATE_TIME,
            self.start_acquisition_date_time,
        );
        put_dt(
            &mut item,
            tags::END_ACQUISITION_DATE_TIME,
            self.end_acquisition_date_time,
        );
        item.put_string_or_remove(
            tags::ANODE_TARGET_MATERIAL,
            VR::CS,
            self.anode_target_material.as_deref(),
        );
        if let Some(thickness) = self.body_part_thickness {
            item.put_f64(tags::BODY_PART_THICKNESS, VR::DS, thickness);
        }
        item.put_string_or_remove(tags::FILTER_TYPE, VR::SH, self.filter_type.as_deref());
        if !self.filter_material.is_empty() {
            item.put_strings(tags::FILTER_MATERIAL, VR::CS, &self.filter_material);
        }
        Ok(item)
    }
}

iod_module!(
    /// Breast Tomosynthesis Acquisition module.
    BreastTomosynthesisAcquisitionModule
);

impl<P> BreastTomosynthesisAcquisitionModule<P> {
    pub const DEFINED_TAGS: [Tag; 1] = [tags::X_RAY_3D_ACQUISITION_SEQUENCE];
}

impl<P: AttributeProvider> BreastTomosynthesisAcquisitionModule<P> {
    pub fn has_values(&self) -> bool {
        self.provider.has_value(tags::X_RAY_3D_ACQUISITION_SEQUENCE)
    }

    pub fn acquisitions(&self) -> Vec<XRay3DAcquisition> {
        self.provider
            .get_items(tags::X_RAY_3D_ACQUISITION_SEQUENCE)
            .unwrap_or_default()
            .iter()
            .map(XRay3DAcquisition::from_item)
            .collect()
    }
}

impl<P: AttributeProviderMut> BreastTomosynthesisAcquisitionModule<P> {
    /// Type 1: at least one item, each with a field of view shape.
    pub fn set_acquisitions(&mut self, acquisitions: &[XRay3DAcquisition]) -> Result<()> {
        if acquisitions.is_empty() {
            return Err(IodError::RequiredAttribute {
                name: "XRay3DAcquisitionSequence",
            });
        }
        let items = acquisitions
            .iter()
            .map(XRay3DAcquisition::to_item)
            .collect::<Result<Vec<_>>>()?;
        self.provider
            .put_items(tags::X_RAY_3D_ACQUISITION_SEQUENCE, items);
        Ok(())
    }

    pub fn append_acquisition(&mut self, acquisition: &XRay3DAcquisition) -> Result<()> {
        let item = acquisition.to_item()?;
        self.provider
            .append_item(tags::X_RAY_3D_ACQUISITION_SEQUENCE, item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn acquisition() -> XRay3DAcquisition {
        XRay3DAcquisition {
            field_of_view_shape: "RECTANGLE".into(),
            field_of_view_origin: Some([12.0, 4.5]),
            field_of_view_horizontal_flip: Some(YesNo::No),
            kvp: Some(29.0),
            exposure_in_mas: Some(61.2),
            primary_positioner_scan_arc: Some(15.0),
            start_acquisition_date_time: NaiveDate::from_ymd_opt(2013, 2, 1)
                .and_then(|d| d.and_hms_opt(9, 15, 0)),
            filter_material: vec!["ALUMINUM".into()],
            ..Default::default()
        }
    }

    #[test]
    fn items_round_trip() {
        let mut module = BreastTomosynthesisAcquisitionModule::new(InMemDicomObject::new_empty());
        module.set_acquisitions(&[acquisition()]).unwrap();
        module.append_acquisition(&acquisition()).unwrap();
        assert!(module.has_values());
        let read = module.acquisitions();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0], acquisition());
    }

    #[test]
    fn shape_is_required() {
        let mut module = BreastTomosynthesisAcquisitionModule::new(InMemDicomObject::new_empty());
        let missing_shape = XRay3DAcquisition::default();
        assert!(module.set_acquisitions(&[missing_shape]).is_err());
        assert!(module.set_acquisitions(&[]).is_err());
        assert!(!module.has_values());
    }

    #[test]
    fn absent_fields_are_not_written() {
        let item = acquisition().to_item().unwrap();
        assert!(item.attribute(tags::GRID).is_none());
        assert!(item.attribute(tags::END_ACQUISITION_DATE_TIME).is_none());
        assert_eq!(item.vr(tags::EXPOSURE_IN_MAS), Some(VR::FD));
    }
}
