//
// dataset.rs
// Dicom-Iod-rs
//
// Attribute provider layer: typed reads and writes over in-memory DICOM objects and sequence items.
//
// Dicom-Iod-rs contributors - October 2026

use std::fmt::Display;
use std::str::FromStr;

use dicom::core::value::{DataSetSequence, PrimitiveValue, Value};
use dicom::core::{DataElement, Length, Tag, VR};
use dicom::object::mem::InMemElement;
use dicom::object::{DefaultDicomObject, InMemDicomObject};

use crate::error::{IodError, Result};
use crate::values::DefinedTerm;

/// Read access to a DICOM attribute collection.
///
/// Everything is expressed through [`AttributeProvider::dataset`], so an owned
/// object, a shared borrow and a sequence item all expose the same getters.
pub trait AttributeProvider {
    fn dataset(&self) -> &InMemDicomObject;

    fn attribute(&self, tag: Tag) -> Option<&InMemElement> {
        self.dataset().element(tag).ok()
    }

    fn vr(&self, tag: Tag) -> Option<VR> {
        self.attribute(tag).map(|e| e.vr())
    }

    /// Present and not zero length.
    fn has_value(&self, tag: Tag) -> bool {
        match self.attribute(tag).map(|e| e.value()) {
            None => false,
            Some(Value::Primitive(PrimitiveValue::Empty)) => false,
            Some(Value::Sequence(seq)) => !seq.items().is_empty(),
            Some(_) => true,
        }
    }

    /// Whole value with multiple values joined by a backslash.
    fn get_raw_string(&self, tag: Tag) -> Option<String> {
        let raw = self.attribute(tag)?.to_str().ok()?;
        let trimmed = trim_padding(&raw);
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn get_strings(&self, tag: Tag) -> Vec<String> {
        match self.get_raw_string(tag) {
            Some(raw) => raw.split('\\').map(|s| trim_padding(s).to_string()).collect(),
            None => Vec::new(),
        }
    }

    fn get_string_at(&self, tag: Tag, index: usize) -> Option<String> {
        self.get_strings(tag)
            .into_iter()
            .nth(index)
            .filter(|s| !s.is_empty())
    }

    fn get_string(&self, tag: Tag) -> Option<String> {
        self.get_string_at(tag, 0)
    }

    fn get_int_at<T: FromStr>(&self, tag: Tag, index: usize) -> Option<T> {
        self.get_string_at(tag, index)?.parse().ok()
    }

    /// First value parsed as an integer, whatever the VR (IS, US, SL ...).
    fn get_int<T: FromStr>(&self, tag: Tag) -> Option<T> {
        self.get_int_at(tag, 0)
    }

    /// All values, or an empty list when any of them fails to parse.
    fn get_ints<T: FromStr>(&self, tag: Tag) -> Vec<T> {
        self.get_strings(tag)
            .iter()
            .map(|s| s.parse().ok())
            .collect::<Option<Vec<T>>>()
            .unwrap_or_default()
    }

    fn get_f64_at(&self, tag: Tag, index: usize) -> Option<f64> {
        self.get_int_at(tag, index)
    }

    fn get_f64(&self, tag: Tag) -> Option<f64> {
        self.get_f64_at(tag, 0)
    }

    fn get_f64s(&self, tag: Tag) -> Vec<f64> {
        self.get_ints(tag)
    }

    fn get_term<T: DefinedTerm>(&self, tag: Tag) -> Option<T> {
        T::from_dicom(&self.get_string(tag)?)
    }

    fn get_terms<T: DefinedTerm>(&self, tag: Tag) -> Vec<T> {
        self.get_strings(tag)
            .iter()
            .filter_map(|s| T::from_dicom(s))
            .collect()
    }

    fn get_tag(&self, tag: Tag) -> Option<Tag> {
        match self.attribute(tag)?.value() {
            Value::Primitive(PrimitiveValue::Tags(tags)) => tags.first().copied(),
            _ => None,
        }
    }

    /// Raw bytes of a primitive value; 16-bit words are returned little-endian.
    fn get_bytes(&self, tag: Tag) -> Option<Vec<u8>> {
        match self.attribute(tag)?.value() {
            Value::Primitive(PrimitiveValue::Empty) => None,
            Value::Primitive(PrimitiveValue::U16(words)) => {
                Some(words.iter().flat_map(|w| w.to_le_bytes()).collect())
            }
            Value::Primitive(value) => Some(value.to_bytes().into_owned()),
            _ => None,
        }
    }

    fn get_items(&self, tag: Tag) -> Option<&[InMemDicomObject]> {
        self.attribute(tag)?.value().items()
    }

    fn get_item(&self, tag: Tag, index: usize) -> Option<&InMemDicomObject> {
        self.get_items(tag)?.get(index)
    }
}

/// Write access on top of [`AttributeProvider`].
pub trait AttributeProviderMut: AttributeProvider {
    fn dataset_mut(&mut self) -> &mut InMemDicomObject;

    fn put(&mut self, element: InMemElement) {
        self.dataset_mut().put(element);
    }

    fn put_value(&mut self, tag: Tag, vr: VR, value: impl Into<PrimitiveValue>) {
        self.put(DataElement::new(tag, vr, value.into()));
    }

    fn put_string(&mut self, tag: Tag, vr: VR, value: &str) {
        self.put_value(tag, vr, PrimitiveValue::Str(value.to_string()));
    }

    fn put_strings<S: AsRef<str>>(&mut self, tag: Tag, vr: VR, values: &[S]) {
        let values = values.iter().map(|s| s.as_ref().to_string()).collect();
        self.put_value(tag, vr, PrimitiveValue::Strs(values));
    }

    /// Integer string (IS).
    fn put_int<T: Display>(&mut self, tag: Tag, value: T) {
        self.put_string(tag, VR::IS, &value.to_string());
    }

    fn put_ints<T: Display>(&mut self, tag: Tag, values: &[T]) {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        self.put_strings(tag, VR::IS, &values);
    }

    /// Writes binary FD/FL values, or a decimal string for any other VR.
    fn put_f64(&mut self, tag: Tag, vr: VR, value: f64) {
        self.put_f64s(tag, vr, &[value]);
    }

    fn put_f64s(&mut self, tag: Tag, vr: VR, values: &[f64]) {
        match vr {
            VR::FD => self.put_value(tag, vr, PrimitiveValue::F64(values.iter().copied().collect())),
            VR::FL => self.put_value(
                tag,
                vr,
                PrimitiveValue::F32(values.iter().map(|v| *v as f32).collect()),
            ),
            _ => {
                let values: Vec<String> = values.iter().map(|v| format_decimal(*v)).collect();
                self.put_strings(tag, vr, &values);
            }
        }
    }

    fn put_tag(&mut self, tag: Tag, value: Tag) {
        self.put_value(tag, VR::AT, PrimitiveValue::Tags(std::iter::once(value).collect()));
    }

    fn put_bytes(&mut self, tag: Tag, vr: VR, bytes: Vec<u8>) {
        self.put_value(tag, vr, PrimitiveValue::U8(bytes.into()));
    }

    fn put_words(&mut self, tag: Tag, vr: VR, words: Vec<u16>) {
        self.put_value(tag, vr, PrimitiveValue::U16(words.into()));
    }

    fn put_items(&mut self, tag: Tag, items: Vec<InMemDicomObject>) {
        self.put(DataElement::new(
            tag,
            VR::SQ,
            DataSetSequence::new(items, Length::UNDEFINED),
        ));
    }

    fn append_item(&mut self, tag: Tag, item: InMemDicomObject) {
        let mut items = self.get_items(tag).map(<[_]>::to_vec).unwrap_or_default();
        items.push(item);
        self.put_items(tag, items);
    }

    /// Type 2 "null": the attribute is present with zero length.
    fn put_empty(&mut self, tag: Tag, vr: VR) {
        if vr == VR::SQ {
            self.put_items(tag, Vec::new());
        } else {
            self.put_value(tag, vr, PrimitiveValue::Empty);
        }
    }

    /// Type 3 "absent".
    fn remove(&mut self, tag: Tag) -> bool {
        self.dataset_mut().remove_element(tag)
    }

    /// Type 1 string setter.
    fn put_required_string(&mut self, tag: Tag, vr: VR, name: &'static str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(IodError::RequiredAttribute { name });
        }
        self.put_string(tag, vr, value);
        Ok(())
    }

    /// Type 2 string setter.
    fn put_string_or_empty(&mut self, tag: Tag, vr: VR, value: Option<&str>) {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.put_string(tag, vr, v),
            None => self.put_empty(tag, vr),
        }
    }

    /// Type 3 string setter.
    fn put_string_or_remove(&mut self, tag: Tag, vr: VR, value: Option<&str>) {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.put_string(tag, vr, v),
            None => {
                self.remove(tag);
            }
        }
    }

    /// Type 1 term setter.
    fn put_required_term<T: DefinedTerm>(&mut self, tag: Tag, value: Option<T>) -> Result<()> {
        let value = value.ok_or(IodError::RequiredAttribute { name: T::NAME })?;
        self.put_string(tag, VR::CS, value.as_dicom_str());
        Ok(())
    }

    /// Type 2 term setter.
    fn put_term_or_empty<T: DefinedTerm>(&mut self, tag: Tag, value: Option<T>) {
        self.put_string_or_empty(tag, VR::CS, value.map(|v| v.as_dicom_str()));
    }

    /// Type 3 term setter.
    fn put_term_or_remove<T: DefinedTerm>(&mut self, tag: Tag, value: Option<T>) {
        self.put_string_or_remove(tag, VR::CS, value.map(|v| v.as_dicom_str()));
    }

    fn put_terms_or_remove<T: DefinedTerm>(&mut self, tag: Tag, values: &[T]) {
        if values.is_empty() {
            self.remove(tag);
        } else {
            let values: Vec<&str> = values.iter().map(|v| v.as_dicom_str()).collect();
            self.put_strings(tag, VR::CS, &values);
        }
    }

    fn put_items_or_remove(&mut self, tag: Tag, items: Vec<InMemDicomObject>) {
        if items.is_empty() {
            self.remove(tag);
        } else {
            self.put_items(tag, items);
        }
    }
}

impl AttributeProvider for InMemDicomObject {
    fn dataset(&self) -> &InMemDicomObject {
        self
    }
}

impl AttributeProviderMut for InMemDicomObject {
    fn dataset_mut(&mut self) -> &mut InMemDicomObject {
        self
    }
}

impl AttributeProvider for DefaultDicomObject {
    fn dataset(&self) -> &InMemDicomObject {
        self
    }
}

impl AttributeProviderMut for DefaultDicomObject {
    fn dataset_mut(&mut self) -> &mut InMemDicomObject {
        self
    }
}

impl<T: AttributeProvider + ?Sized> AttributeProvider for &T {
    fn dataset(&self) -> &InMemDicomObject {
        (**self).dataset()
    }
}

impl<T: AttributeProvider + ?Sized> AttributeProvider for &mut T {
    fn dataset(&self) -> &InMemDicomObject {
        (**self).dataset()
    }
}

impl<T: AttributeProviderMut + ?Sized> AttributeProviderMut for &mut T {
    fn dataset_mut(&mut self) -> &mut InMemDicomObject {
        (**self).dataset_mut()
    }
}

/// DICOM pads strings with spaces (and UIDs with NUL).
pub(crate) fn trim_padding(value: &str) -> &str {
    value.trim_matches(|c: char| c == ' ' || c == '\0')
}

/// Formats a decimal string (DS), which is limited to 16 characters.
pub fn format_decimal(value: f64) -> String {
    let plain = value.to_string();
    if plain.len() <= 16 {
        return plain;
    }
    for precision in (0..=15).rev() {
        let fixed = format!("{value:.precision$}");
        let fixed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        };
        if fixed.len() <= 16 {
            return fixed;
        }
    }
    for precision in (0..=15).rev() {
        let scientific = format!("{value:.precision$e}");
        if scientific.len() <= 16 {
            return scientific;
        }
    }
    format!("{value:e}")
}
