use crate::areas::session::Session;
use crate::artifacts::diff::change_filter::ChangeFilter;
use crate::artifacts::diff::change_set::ChangeSet;
use crate::artifacts::diff::change_type::ChangeType;
use crate::artifacts::diff::classified_hash::ClassifiedHash;
use crate::artifacts::diff::flatten::flatten_filtered;
use crate::artifacts::hash::hash_list::HashListSource;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareFormat {
    Short,
    #[default]
    Long,
    Json,
}

impl CompareFormat {
    pub fn as_str(&self) -> &str {
        match self {
            CompareFormat::Short => "short",
            CompareFormat::Long => "long",
            CompareFormat::Json => "json",
        }
    }
}

impl TryFrom<&str> for CompareFormat {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "short" => Ok(CompareFormat::Short),
            "long" => Ok(CompareFormat::Long),
            "json" => Ok(CompareFormat::Json),
            _ => Err(anyhow::anyhow!(
                "Invalid format {:?}, expected one of short, long, json",
                value
            )),
        }
    }
}

impl std::str::FromStr for CompareFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        CompareFormat::try_from(s)
    }
}

impl std::fmt::Display for CompareFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, new)]
pub struct CompareOptions {
    format: CompareFormat,
    filter: ChangeFilter,
    stat: bool,
}

impl Session {
    pub fn compare(
        &self,
        old: &HashListSource,
        new: &HashListSource,
        options: CompareOptions,
    ) -> anyhow::Result<()> {
        let change_set = self.load_change_set(old, new)?;
        let records = flatten_filtered(&change_set, options.filter);

        match options.format {
            CompareFormat::Json => return self.write_records(&records, false),
            CompareFormat::Short => self.print_short_format(&records)?,
            CompareFormat::Long => self.print_long_format(&change_set, options.filter)?,
        }

        if options.stat {
            writeln!(self.writer(), "{}", change_set.summary())?;
        }
        self.writer().flush()?;

        Ok(())
    }

    fn print_short_format(&self, records: &[ClassifiedHash]) -> anyhow::Result<()> {
        let mut writer = self.writer();

        for record in records {
            writeln!(writer, "{}", record.to_short_line())?;
        }

        Ok(())
    }

    fn print_long_format(&self, change_set: &ChangeSet, filter: ChangeFilter) -> anyhow::Result<()> {
        let sections = ChangeType::REPORT_ORDER
            .into_iter()
            .filter(|change| filter.matches(*change))
            .filter(|change| !change_set.get(*change).is_empty())
            .collect::<Vec<_>>();

        if sections.is_empty() {
            writeln!(self.writer(), "nothing to report")?;
            return Ok(());
        }

        for change in sections {
            self.print_section(change, change_set)?;
        }

        Ok(())
    }

    fn print_section(&self, change: ChangeType, change_set: &ChangeSet) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "{}", change.section_title())?;
        for hash in change_set.get(change) {
            writeln!(writer, "{}", ClassifiedHash::new(hash.clone(), change))?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
