//
// dump.rs
// Dicom-Iod-rs
//
// Prints the attributes of each module present in a data set, grouped by module,
// with names resolved through the standard dictionary.
//
// Dicom-Iod-rs contributors - October 2026

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use dicom::core::dictionary::DataDictionary;
use dicom::core::value::Value;
use dicom::core::{PrimitiveValue, Tag};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::mem::InMemElement;
use dicom::object::{open_file, InMemDicomObject};

use crate::dataset::AttributeProvider;
use crate::modules::{
    BasicFilmBoxModule, BreastTomosynthesisAcquisitionModule, GeneralSeriesModule,
    MultiFrameDimensionModule, MultiFrameFunctionalGroupsModule, OverlayPlaneModule,
    PatientModule, PetSeriesModule, SopCommonModule,
};

type Module = InMemDicomObject;

/// Module names with the tags each one defines.
pub fn module_tags() -> Vec<(&'static str, Vec<Tag>)> {
    vec![
        ("Patient", PatientModule::<Module>::DEFINED_TAGS.to_vec()),
        ("General Series", GeneralSeriesModule::<Module>::DEFINED_TAGS.to_vec()),
        ("PET Series", PetSeriesModule::<Module>::DEFINED_TAGS.to_vec()),
        (
            "Multi-frame Functional Groups",
            MultiFrameFunctionalGroupsModule::<Module>::DEFINED_TAGS.to_vec(),
        ),
        (
            "Multi-frame Dimension",
            MultiFrameDimensionModule::<Module>::DEFINED_TAGS.to_vec(),
        ),
        (
            "Breast Tomosynthesis Acquisition",
            BreastTomosynthesisAcquisitionModule::<Module>::DEFINED_TAGS.to_vec(),
        ),
        ("Basic Film Box", BasicFilmBoxModule::<Module>::DEFINED_TAGS.to_vec()),
        ("Overlay Plane", OverlayPlaneModule::<Module>::defined_tags()),
        ("SOP Common", SopCommonModule::<Module>::DEFINED_TAGS.to_vec()),
    ]
}

pub fn dump_file(path: &Path, max_depth: usize, max_value_len: usize) -> Result<()> {
    let output = dump_to_string(path, max_depth, max_value_len)?;
    println!("{output}");
    Ok(())
}

pub fn dump_to_string(path: &Path, max_depth: usize, max_value_len: usize) -> Result<String> {
    let obj = open_file(path).context("Failed to open DICOM file")?;
    Ok(dump_modules(&obj, max_depth, max_value_len))
}

/// Modules without any attribute present are left out.
pub fn dump_modules<P: AttributeProvider>(provider: &P, max_depth: usize, max_value_len: usize) -> String {
    let mut out = String::new();
    for (name, tags) in module_tags() {
        let present: Vec<Tag> = tags
            .into_iter()
            .filter(|&tag| provider.attribute(tag).is_some())
            .collect();
        if present.is_empty() {
            continue;
        }
        let _ = writeln!(out, "[{}]", name);
        for tag in present {
            if let Some(element) = provider.attribute(tag) {
                dump_element(element, 1, max_depth, max_value_len, &mut out);
            }
        }
    }
    out
}

fn dump_element(
    element: &InMemElement,
    depth: usize,
    max_depth: usize,
    max_value_len: usize,
    out: &mut String,
) {
    let tag = element.header().tag;
    let vr = element.header().vr;
    let indent = "  ".repeat(depth);
    let label = format!("{}{} {} {}", indent, format_tag(tag), tag_name(tag), vr);

    match element.value() {
        Value::Primitive(p) => {
            let _ = writeln!(out, "{} {}", label, preview_primitive(p, max_value_len));
        }
        Value::Sequence(seq) => {
            let _ = writeln!(out, "{} [sequence: {} item(s)]", label, seq.items().len());
            if depth < max_depth {
                for (idx, item) in seq.items().iter().enumerate() {
                    let _ = writeln!(out, "{}  Item {}", indent, idx + 1);
                    for nested in item.iter() {
                        dump_element(nested, depth + 2, max_depth, max_value_len, out);
                    }
                }
            }
        }
        Value::PixelSequence(p) => {
            let _ = writeln!(out, "{} [encapsulated: {} fragment(s)]", label, p.fragments().len());
        }
    }
}

fn preview_primitive(value: &PrimitiveValue, max_value_len: usize) -> String {
    match value {
        PrimitiveValue::Empty => "<empty>".to_string(),
        PrimitiveValue::U8(bytes) => format!("{} bytes", bytes.len()),
        PrimitiveValue::U16(words) if words.len() > 16 => format!("{} words", words.len()),
        _ => truncate(&value.to_str(), max_value_len),
    }
}

fn truncate(input: &str, limit: usize) -> String {
    match input.char_indices().nth(limit) {
        None => input.to_string(),
        Some((end, _)) => format!("{}…", &input[..end]),
    }
}

fn format_tag(tag: Tag) -> String {
    format!("({:04X},{:04X})", tag.group(), tag.element())
}

/// Repeating overlay groups resolve through their 60xx dictionary entry.
fn tag_name(tag: Tag) -> String {
    let dictionary = StandardDataDictionary::default();
    dictionary
        .by_tag(tag)
        .or_else(|| dictionary.by_tag(Tag(tag.group() & 0xFF01, tag.element())))
        .map(|entry| entry.alias.to_string())
        .unwrap_or_else(|| "UnknownTag".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::VR;

    use crate::dataset::AttributeProviderMut;
    use crate::tags;

    #[test]
    fn groups_present_attributes_by_module() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_string(tags::PATIENT_ID, VR::LO, "PAT-1");
        obj.put_string(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4");
        let out = dump_modules(&obj, 2, 64);
        assert!(out.contains("[Patient]"));
        assert!(out.contains("(0010,0020) PatientID LO PAT-1"));
        assert!(out.contains("[SOP Common]"));
        assert!(!out.contains("[General Series]"));
    }

    #[test]
    fn long_values_are_truncated() {
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
