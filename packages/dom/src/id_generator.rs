use crc32fast::Hasher;

/// Generate a document seed from a site identifier using CRC32
pub fn document_seed(site_id: &str) -> String {
    let mut buff = String::from(site_id);
    if !site_id.starts_with("site://") {
        buff = format!("site://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for pages and components within a site
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Site seed (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(site_id: &str) -> Self {
        Self {
            seed: document_seed(site_id),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get the site seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
