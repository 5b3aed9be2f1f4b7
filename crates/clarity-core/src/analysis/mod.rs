pub mod model;
pub mod service;
pub mod tone;
pub mod wire;

pub use model::{Analysis, Confidence, FigurativeInstance, FigureType};
pub use service::{AnalysisService, EMPTY_INPUT_MESSAGE, validate_input};
pub use tone::ToneSpectrum;
pub use wire::{AnalysisPayload, AnalyzeReply, AnalyzeRequest, parse_analysis};
