//
// person_name.rs
// Dicom-Iod-rs
//
// PN values: alphabetic components plus the ideographic and phonetic groups.
//
// Dicom-Iod-rs contributors - October 2026

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonName {
    pub family_name: String,
    pub given_name: String,
    pub middle_name: String,
    pub prefix: String,
    pub suffix: String,
    pub ideographic: Option<String>,
    pub phonetic: Option<String>,
}

impl PersonName {
    pub fn new(family_name: impl Into<String>, given_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            given_name: given_name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_string().is_empty()
    }

    /// "Given Family", as shown on a viewer.
    pub fn formatted(&self) -> String {
        [&self.prefix, &self.given_name, &self.middle_name, &self.family_name, &self.suffix]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for PersonName {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut groups = value.trim_end().split('=');
        let alphabetic = groups.next().unwrap_or_default();
        let mut components = alphabetic.split('^').map(|c| c.trim().to_string());
        let mut next = || components.next().unwrap_or_default();
        let group = |g: Option<&str>| g.map(str::to_string).filter(|g| !g.is_empty());

        Ok(PersonName {
            family_name: next(),
            given_name: next(),
            middle_name: next(),
            prefix: next(),
            suffix: next(),
            ideographic: group(groups.next()),
            phonetic: group(groups.next()),
        })
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = [
            &self.family_name,
            &self.given_name,
            &self.middle_name,
            &self.prefix,
            &self.suffix,
        ];
        let used = components
            .iter()
            .rposition(|c| !c.is_empty())
            .map_or(0, |i| i + 1);
        let alphabetic = components[..used]
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("^");
        f.write_str(&alphabetic)?;

        match (&self.ideographic, &self.phonetic) {
            (None, None) => Ok(()),
            (Some(i), None) => write!(f, "={i}"),
            (i, Some(p)) => write!(f, "={}={p}", i.as_deref().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_components_and_groups() {
        let name: PersonName = "Yamada^Tarou=山田^太郎=やまだ^たろう".parse().unwrap();
        assert_eq!(name.family_name, "Yamada");
        assert_eq!(name.given_name, "Tarou");
        assert_eq!(name.ideographic.as_deref(), Some("山田^太郎"));
        assert_eq!(name.phonetic.as_deref(), Some("やまだ^たろう"));
        assert_eq!(name.to_string(), "Yamada^Tarou=山田^太郎=やまだ^たろう");
    }

    #[test]
    fn trailing_empty_components_are_dropped() {
        let mut name = PersonName::new("Doe", "John");
        name.prefix = "Dr".into();
        assert_eq!(name.to_string(), "Doe^John^^Dr");
        assert_eq!(name.formatted(), "Dr John Doe");
        assert_eq!(PersonName::new("Doe", "").to_string(), "Doe");
        assert!(PersonName::default().is_empty());
    }
}
