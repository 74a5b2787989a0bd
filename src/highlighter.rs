use crate::color::Rgb;
use crate::lines::{LineIndex, LineLookup};
use crate::region::Region;
use crate::settings::{Pattern, Settings};
use if_chain::if_chain;
use nohash_hasher::IntSet;
use regex::{Regex, RegexBuilder};

/// One compiled highlight rule, colours resolved up front
#[derive(Debug)]
struct Rule {
    exp: Regex,
    background: Option<Rgb>,
    foreground: Option<Rgb>,
}

/// Scans text against an ordered rule table and computes highlight regions.
///
/// Rules are evaluated in the order they were added. The first rule to match
/// on a line claims that line's background tint; every rule's own matches are
/// still marked with span regions. A scan is a pure function of the text and
/// the rule table and never fails: bad expressions and bad colours shrink
/// the result, they do not abort it.
#[derive(Debug)]
pub struct Highlighter {
    /// The compiled rules, in table order
    rules: Vec<Rule>,
    /// Tint whole lines rather than just their text content
    pub entire_line: bool,
}

impl Default for Highlighter {
    fn default() -> Self {
        // Whole-line tinting is the product default
        Self::new(true)
    }
}

impl Highlighter {
    /// Create a new highlighter with no rules
    pub fn new(entire_line: bool) -> Self {
        Self {
            rules: vec![],
            entire_line,
        }
    }

    /// Create a highlighter loaded with a settings table
    pub fn from_settings(settings: &Settings) -> Self {
        let mut result = Self::new(settings.highlight_entire_line);
        for pattern in &settings.patterns {
            result.add(pattern);
        }
        result
    }

    /// Compile a pattern and append it to the rule table.
    /// An empty expression is inactive and an expression that fails to
    /// compile is dropped, either way the other rules are unaffected.
    pub fn add(&mut self, pattern: &Pattern) {
        if pattern.expression.is_empty() {
            return;
        }
        let exp = match RegexBuilder::new(&pattern.expression)
            .case_insensitive(true)
            .build()
        {
            Ok(exp) => exp,
            Err(_) => return,
        };
        self.rules.push(Rule {
            exp,
            background: Rgb::parse(&pattern.background),
            foreground: Rgb::parse(&pattern.foreground),
        });
    }

    /// The number of active rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Determines if the rule table is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Scan the given text, indexing its lines on the fly
    pub fn run(&self, text: &str) -> Vec<Region> {
        self.run_with(text, &LineIndex::new(text))
    }

    /// Scan the given text using the host's own line-offset queries.
    /// Regions come back in discovery order, see [`crate::layer_sort`] for
    /// putting them into rendering order.
    pub fn run_with(&self, text: &str, lines: &impl LineLookup) -> Vec<Region> {
        let mut regions = vec![];
        if text.is_empty() || self.rules.is_empty() {
            return regions;
        }
        let len = text.chars().count();
        // Lines that have already been given their background this scan
        let mut highlighted: IntSet<usize> = IntSet::default();
        for rule in &self.rules {
            // Running byte to character conversion for this rule's matches
            let mut byte = 0;
            let mut chars = 0;
            for m in rule.exp.find_iter(text) {
                chars += text[byte..m.start()].chars().count();
                byte = m.start();
                let start = chars;
                let end = start + text[m.start()..m.end()].chars().count();
                // A zero-width match would decorate nothing
                if start >= end {
                    continue;
                }
                if start >= len {
                    continue;
                }
                // A rule with no resolvable colours has nothing to render
                if rule.background.is_none() && rule.foreground.is_none() {
                    continue;
                }
                let line = lines.line_of(start);
                // Tint the line once, the first rule to reach it wins
                if_chain! {
                    if let Some(bg) = rule.background;
                    if !highlighted.contains(&line);
                    then {
                        let (from, to) = self.line_range(text, lines, line);
                        if from < to {
                            regions.push(Region::line(from, to, bg));
                            highlighted.insert(line);
                        }
                    }
                }
                // The matched text itself is always marked
                let fg = rule
                    .foreground
                    .or_else(|| rule.background.map(Rgb::contrast));
                regions.push(Region::span(start, end, rule.background, fg));
            }
        }
        regions
    }

    /// The character range a line tint should cover: the whole line, or its
    /// text trimmed of surrounding whitespace, blank lines falling back to
    /// their full range
    fn line_range(&self, text: &str, lines: &impl LineLookup, line: usize) -> (usize, usize) {
        let start = lines.line_start(line);
        let end = lines.line_end(line);
        if self.entire_line {
            return (start, end);
        }
        let mut first = None;
        let mut last = None;
        let width = end.saturating_sub(start);
        for (i, ch) in text.chars().skip(start).take(width).enumerate() {
            if !ch.is_whitespace() {
                first.get_or_insert(i);
                last = Some(i);
            }
        }
        match (first, last) {
            (Some(first), Some(last)) => (start + first, start + last + 1),
            _ => (start, end),
        }
    }
}

/// Compute the highlight regions for one document in a single call: compile
/// the pattern table, scan the text, return the regions in discovery order.
pub fn highlight(
    text: &str,
    patterns: &[Pattern],
    entire_line: bool,
    lines: &impl LineLookup,
) -> Vec<Region> {
    let mut highlighter = Highlighter::new(entire_line);
    for pattern in patterns {
        highlighter.add(pattern);
    }
    highlighter.run_with(text, lines)
}
