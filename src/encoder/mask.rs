/// Mask application and penalty-based mask selection
use log::{debug, trace};

use crate::config::debug_enabled;
use crate::encoder::placement::DataModule;
use crate::models::{MaskPattern, ModuleGrid};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

const FINDER_LIKE: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];
const FINDER_LIKE_REVERSED: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];

/// Penalty score split by rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Penalty {
    /// Runs of five or more same-coloured modules
    pub runs: u32,
    /// 2x2 same-coloured blocks
    pub blocks: u32,
    /// Finder-like 1:1:3:1:1 sequences with a light side
    pub finder_like: u32,
    /// Dark/light imbalance
    pub balance: u32,
}

impl Penalty {
    /// Sum of all four rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// One scored mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskCandidate {
    /// Mask that was applied
    pub pattern: MaskPattern,
    /// Total penalty with that mask
    pub penalty: u32,
}

/// Write `original XOR mask(x, y)` into every data module.
///
/// Works from the unmasked values recorded at placement, so applying
/// another mask afterwards replaces this one rather than stacking.
pub fn apply_mask(grid: &mut ModuleGrid, data: &[DataModule], mask: MaskPattern) {
    for m in data {
        grid.set(m.x, m.y, m.value.xor(mask.is_masked(m.x, m.y)));
    }
}

/// Score a finished (masked) grid
pub fn penalty(grid: &ModuleGrid) -> Penalty {
    let size = grid.size();
    if size == 0 {
        return Penalty::default();
    }
    let dark: Vec<bool> = grid.modules().iter().map(|m| m.is_dark()).collect();
    let at = |x: usize, y: usize| dark[y * size + x];

    let mut result = Penalty::default();
    let mut line = Vec::with_capacity(size);
    for i in 0..size {
        line.clear();
        line.extend((0..size).map(|x| at(x, i)));
        result.runs += run_penalty(&line);
        result.finder_like += finder_penalty(&line);

        line.clear();
        line.extend((0..size).map(|y| at(i, y)));
        result.runs += run_penalty(&line);
        result.finder_like += finder_penalty(&line);
    }

    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let c = at(x, y);
            if c == at(x + 1, y) && c == at(x, y + 1) && c == at(x + 1, y + 1) {
                result.blocks += PENALTY_N2;
            }
        }
    }

    let total = size * size;
    let dark_count = dark.iter().filter(|&&d| d).count();
    let deviation = (100 * dark_count).abs_diff(50 * total) / (5 * total);
    result.balance = deviation as u32 * PENALTY_N4;

    result
}

fn run_penalty(line: &[bool]) -> u32 {
    line.chunk_by(|a, b| a == b)
        .map(|run| run.len() as u32)
        .filter(|&len| len >= 5)
        .map(|len| PENALTY_N1 + (len - 5))
        .sum()
}

fn finder_penalty(line: &[bool]) -> u32 {
    let matches = line
        .windows(FINDER_LIKE.len())
        .filter(|w| *w == FINDER_LIKE || *w == FINDER_LIKE_REVERSED)
        .count();
    matches as u32 * PENALTY_N3
}

/// Scores the eight masks and commits the best one
pub struct MaskSelector;

impl MaskSelector {
    /// Score all eight masks against the unmasked grid, in ascending id order
    pub fn evaluate(grid: &ModuleGrid, data: &[DataModule]) -> Vec<MaskCandidate> {
        let mut scratch = grid.clone();
        MaskPattern::ALL
            .iter()
            .map(|&pattern| {
                apply_mask(&mut scratch, data, pattern);
                let score = penalty(&scratch);
                if debug_enabled() {
                    debug!("mask {}: {:?} total {}", pattern.id(), score, score.total());
                } else {
                    trace!("mask {}: penalty {}", pattern.id(), score.total());
                }
                MaskCandidate {
                    pattern,
                    penalty: score.total(),
                }
            })
            .collect()
    }

    /// Lowest-penalty candidate; ties go to the lowest id
    pub fn best(candidates: &[MaskCandidate]) -> Option<MaskCandidate> {
        let mut best: Option<MaskCandidate> = None;
        for &candidate in candidates {
            if best.is_none_or(|b| candidate.penalty < b.penalty) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Pick the best mask and commit it into `grid`
    pub fn select(grid: &mut ModuleGrid, data: &[DataModule]) -> MaskPattern {
        let candidates = Self::evaluate(grid, data);
        let best = Self::best(&candidates).map_or(MaskPattern::Pattern0, |c| c.pattern);
        debug!(
            "selected mask {} (penalties {:?})",
            best.id(),
            candidates.iter().map(|c| c.penalty).collect::<Vec<_>>()
        );
        apply_mask(grid, data, best);
        best
    }
}
