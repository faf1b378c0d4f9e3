use crate::areas::session::Session;
use crate::artifacts::hash::generator::HashGenerator;
use std::io::Write;

impl Session {
    pub fn generate(&self, generator: HashGenerator) -> anyhow::Result<()> {
        let hashes = generator.generate();
        tracing::debug!(count = hashes.len(), "generated hash list");

        let mut writer = self.writer();
        for hash in hashes.iter() {
            writeln!(writer, "{}", hash)?;
        }
        writer.flush()?;

        Ok(())
    }
}
