use std::path::PathBuf;

use log::LevelFilter;

/*
    Central place for application configuration until we decide on a non-hardcode method
 */

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Written by test_direct_drums, read by nobody in particular - inspect by hand
pub const DIRECT_DRUMS_FILE_NAME: &str = "test_direct_drums.json";

// Tempo assumed by the play service when a payload leaves it out
pub const DEFAULT_TEMPO: u32 = 120;

pub fn direct_drums_path() -> PathBuf {
    std::env::temp_dir().join(DIRECT_DRUMS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    #[test]
    fn direct_drums_lands_in_temp_dir() {
        assert_eq!(super::direct_drums_path(), std::env::temp_dir().join("test_direct_drums.json"));
    }
}
