/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and simulation counters to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Ticks run in the last frame and ticks dropped so far
 * - Lines exerting a force and lines currently drawn
 */

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_frame: usize,
    pub dropped_ticks: u64,
    pub engaged_pairs: usize,
    pub visible_lines: usize,
    pub interpolation_alpha: f64,
}
