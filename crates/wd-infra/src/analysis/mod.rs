mod filename_analyzer;

pub use filename_analyzer::FilenameImageAnalyzer;
