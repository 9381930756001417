//
// tags.rs
// Dicom-Iod-rs
//
// Attribute tags used by the IOD modules, grouped by the module that owns them.
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::Tag;

// Patient (C.7.1.1)
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
pub const PATIENT_SPECIES_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2202);
pub const PATIENT_BREED_DESCRIPTION: Tag = Tag(0x0010, 0x2292);
pub const PATIENT_BREED_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2293);
pub const RESPONSIBLE_PERSON: Tag = Tag(0x0010, 0x2297);
pub const RESPONSIBLE_PERSON_ROLE: Tag = Tag(0x0010, 0x2298);
pub const RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0010, 0x2299);
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);

// SOP Instance Reference / Image SOP Instance Reference macros
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);

// Code Sequence macro
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);

// General Series (C.7.3.1)
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
pub const SMALLEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0108);
pub const LARGEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0109);
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0280);
pub const ANATOMICAL_ORIENTATION_TYPE: Tag = Tag(0x0010, 0x2210);

// Request Attributes macro
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
pub const REASON_FOR_THE_REQUESTED_PROCEDURE: Tag = Tag(0x0040, 0x1002);
pub const REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x100A);
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
pub const SCHEDULED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0008);

// SOP Common (C.12.1)
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
pub const CODING_SCHEME_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0110);
pub const CODING_SCHEME_REGISTRY: Tag = Tag(0x0008, 0x0112);
pub const CODING_SCHEME_UID: Tag = Tag(0x0008, 0x010C);
pub const CODING_SCHEME_EXTERNAL_ID: Tag = Tag(0x0008, 0x0114);
pub const CODING_SCHEME_NAME: Tag = Tag(0x0008, 0x0115);
pub const CODING_SCHEME_RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0008, 0x0116);
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
pub const SOP_INSTANCE_STATUS: Tag = Tag(0x0100, 0x0410);
pub const SOP_AUTHORIZATION_DATE_TIME: Tag = Tag(0x0100, 0x0420);
pub const SOP_AUTHORIZATION_COMMENT: Tag = Tag(0x0100, 0x0424);
pub const AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER: Tag = Tag(0x0100, 0x0426);

// Basic Film Box (C.13.3)
pub const IMAGE_DISPLAY_FORMAT: Tag = Tag(0x2010, 0x0010);
pub const ANNOTATION_DISPLAY_FORMAT_ID: Tag = Tag(0x2010, 0x0030);
pub const FILM_ORIENTATION: Tag = Tag(0x2010, 0x0040);
pub const FILM_SIZE_ID: Tag = Tag(0x2010, 0x0050);
pub const MAGNIFICATION_TYPE: Tag = Tag(0x2010, 0x0060);
pub const SMOOTHING_TYPE: Tag = Tag(0x2010, 0x0080);
pub const BORDER_DENSITY: Tag = Tag(0x2010, 0x0100);
pub const EMPTY_IMAGE_DENSITY: Tag = Tag(0x2010, 0x0110);
pub const MIN_DENSITY: Tag = Tag(0x2010, 0x0120);
pub const MAX_DENSITY: Tag = Tag(0x2010, 0x0130);
pub const TRIM: Tag = Tag(0x2010, 0x0140);
pub const CONFIGURATION_INFORMATION: Tag = Tag(0x2010, 0x0150);
pub const ILLUMINATION: Tag = Tag(0x2010, 0x015E);
pub const REFLECTED_AMBIENT_LIGHT: Tag = Tag(0x2010, 0x0160);
pub const REQUESTED_RESOLUTION_ID: Tag = Tag(0x2020, 0x0050);
pub const REFERENCED_FILM_SESSION_SEQUENCE: Tag = Tag(0x2010, 0x0500);
pub const REFERENCED_IMAGE_BOX_SEQUENCE: Tag = Tag(0x2010, 0x0510);
pub const REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE: Tag = Tag(0x2010, 0x0520);

// PET Series (C.8.9.1)
pub const UNITS: Tag = Tag(0x0054, 0x1001);
pub const SUV_TYPE: Tag = Tag(0x0054, 0x1006);
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
pub const REPROJECTION_METHOD: Tag = Tag(0x0054, 0x1004);
pub const NUMBER_OF_R_R_INTERVALS: Tag = Tag(0x0054, 0x0061);
pub const NUMBER_OF_TIME_SLOTS: Tag = Tag(0x0054, 0x0071);
pub const NUMBER_OF_TIME_SLICES: Tag = Tag(0x0054, 0x0101);
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
pub const RANDOMS_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1100);
pub const ATTENUATION_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1101);
pub const SCATTER_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1105);
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
pub const RECONSTRUCTION_METHOD: Tag = Tag(0x0054, 0x1103);
pub const DETECTOR_LINES_OF_RESPONSE_USED: Tag = Tag(0x0054, 0x1104);
pub const ACQUISITION_START_CONDITION: Tag = Tag(0x0018, 0x0073);
pub const ACQUISITION_START_CONDITION_DATA: Tag = Tag(0x0018, 0x0074);
pub const ACQUISITION_TERMINATION_CONDITION: Tag = Tag(0x0018, 0x0071);
pub const ACQUISITION_TERMINATION_CONDITION_DATA: Tag = Tag(0x0018, 0x0075);
pub const FIELD_OF_VIEW_SHAPE: Tag = Tag(0x0018, 0x1147);
pub const FIELD_OF_VIEW_DIMENSIONS: Tag = Tag(0x0018, 0x1149);
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
pub const GANTRY_DETECTOR_SLEW: Tag = Tag(0x0018, 0x1121);
pub const TYPE_OF_DETECTOR_MOTION: Tag = Tag(0x0054, 0x0202);
pub const COLLIMATOR_TYPE: Tag = Tag(0x0018, 0x1181);
pub const COLLIMATOR_GRID_NAME: Tag = Tag(0x0018, 0x1180);
pub const AXIAL_ACCEPTANCE: Tag = Tag(0x0054, 0x1200);
pub const AXIAL_MASH: Tag = Tag(0x0054, 0x1201);
pub const TRANSVERSE_MASH: Tag = Tag(0x0054, 0x1202);
pub const DETECTOR_ELEMENT_SIZE: Tag = Tag(0x0054, 0x1203);
pub const COINCIDENCE_WINDOW_WIDTH: Tag = Tag(0x0054, 0x1210);
pub const SECONDARY_COUNTS_TYPE: Tag = Tag(0x0054, 0x1220);

// Multi-frame Dimension (C.7.6.17)
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
pub const DIMENSION_ORGANIZATION_TYPE: Tag = Tag(0x0020, 0x9311);
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
pub const DIMENSION_INDEX_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9213);
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
pub const FUNCTIONAL_GROUP_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9238);
pub const DIMENSION_DESCRIPTION_LABEL: Tag = Tag(0x0020, 0x9421);

// Multi-frame Functional Groups (C.7.6.16)
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
pub const CONCATENATION_FRAME_OFFSET_NUMBER: Tag = Tag(0x0020, 0x9228);
pub const REPRESENTATIVE_FRAME_NUMBER: Tag = Tag(0x0028, 0x6010);
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);
pub const SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE: Tag = Tag(0x0020, 0x0242);
pub const IN_CONCATENATION_NUMBER: Tag = Tag(0x0020, 0x9162);
pub const IN_CONCATENATION_TOTAL_NUMBER: Tag = Tag(0x0020, 0x9163);

// Functional group macros
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
pub const FRAME_ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x9156);
pub const STACK_ID: Tag = Tag(0x0020, 0x9056);
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
pub const FRAME_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9074);
pub const FRAME_REFERENCE_DATE_TIME: Tag = Tag(0x0018, 0x9151);
pub const FRAME_ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9220);
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
pub const FRAME_VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
pub const FRAME_LATERALITY: Tag = Tag(0x0020, 0x9072);
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);

// Breast Tomosynthesis Acquisition (C.8.21.3)
pub const X_RAY_3D_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9507);
pub const FIELD_OF_VIEW_ORIGIN: Tag = Tag(0x0018, 0x7030);
pub const FIELD_OF_VIEW_ROTATION: Tag = Tag(0x0018, 0x7032);
pub const FIELD_OF_VIEW_HORIZONTAL_FLIP: Tag = Tag(0x0018, 0x7034);
pub const GRID: Tag = Tag(0x0018, 0x1166);
pub const KVP: Tag = Tag(0x0018, 0x0060);
pub const X_RAY_TUBE_CURRENT_IN_MA: Tag = Tag(0x0018, 0x9330);
pub const EXPOSURE_TIME_IN_MS: Tag = Tag(0x0018, 0x9328);
pub const EXPOSURE_IN_MAS: Tag = Tag(0x0018, 0x9332);
pub const START_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9516);
pub const END_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9517);
pub const PRIMARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9508);
pub const PRIMARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9510);
pub const PRIMARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9514);
pub const SECONDARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9509);
pub const SECONDARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9511);
pub const SECONDARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9515);
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
pub const ANODE_TARGET_MATERIAL: Tag = Tag(0x0018, 0x1191);
pub const BODY_PART_THICKNESS: Tag = Tag(0x0018, 0x11A0);
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
pub const FILTER_MATERIAL: Tag = Tag(0x0018, 0x7050);

// Graphic Annotation (C.10.5)
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
pub const GRAPHIC_LAYER: Tag = Tag(0x0070, 0x0002);
pub const BOUNDING_BOX_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0003);
pub const ANCHOR_POINT_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0004);
pub const GRAPHIC_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0005);
pub const UNFORMATTED_TEXT_VALUE: Tag = Tag(0x0070, 0x0006);
pub const TEXT_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0008);
pub const GRAPHIC_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0009);
pub const BOUNDING_BOX_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x0010);
pub const BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0070, 0x0011);
pub const BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION: Tag = Tag(0x0070, 0x0012);
pub const ANCHOR_POINT: Tag = Tag(0x0070, 0x0014);
pub const ANCHOR_POINT_VISIBILITY: Tag = Tag(0x0070, 0x0015);
pub const GRAPHIC_DIMENSIONS: Tag = Tag(0x0070, 0x0020);
pub const NUMBER_OF_GRAPHIC_POINTS: Tag = Tag(0x0070, 0x0021);
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
pub const GRAPHIC_FILLED: Tag = Tag(0x0070, 0x0024);

// Image Pixel (C.7.6.3)
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

// Overlay Plane (C.9.2), element numbers within the repeating 60xx group
pub const OVERLAY_GROUP_BASE: u16 = 0x6000;
pub const OVERLAY_ROWS: u16 = 0x0010;
pub const OVERLAY_COLUMNS: u16 = 0x0011;
pub const NUMBER_OF_FRAMES_IN_OVERLAY: u16 = 0x0015;
pub const OVERLAY_DESCRIPTION: u16 = 0x0022;
pub const OVERLAY_TYPE: u16 = 0x0040;
pub const OVERLAY_SUBTYPE: u16 = 0x0045;
pub const OVERLAY_ORIGIN: u16 = 0x0050;
pub const IMAGE_FRAME_ORIGIN: u16 = 0x0051;
pub const OVERLAY_BITS_ALLOCATED: u16 = 0x0100;
pub const OVERLAY_BIT_POSITION: u16 = 0x0102;
pub const OVERLAY_LABEL: u16 = 0x1500;
pub const ROI_AREA: u16 = 0x1301;
pub const ROI_MEAN: u16 = 0x1302;
pub const ROI_STANDARD_DEVIATION: u16 = 0x1303;
pub const OVERLAY_DATA: u16 = 0x3000;
