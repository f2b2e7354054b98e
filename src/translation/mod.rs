/*!
 * Translation of LRC lyrics using an AI provider.
 *
 * This module contains the line translation pipeline. It is split into
 * several submodules:
 *
 * - `core`: The `Translator` seam and the provider-backed translation service
 * - `pacing`: Request pacing between consecutive translation calls
 * - `pipeline`: The sequential line-by-line driver
 * - `mock`: Scripted translator for tests
 */

// Re-export main types for easier usage
pub use self::core::{TranslationService, TranslationSettings, Translator};
pub use self::pacing::{FixedDelayPacer, Pacer};
pub use self::pipeline::{LyricsPipeline, PipelineSummary};

// Submodules
pub mod core;
pub mod mock;
pub mod pacing;
pub mod pipeline;
