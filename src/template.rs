//! Source text for the simulated Link / Add Account page.
//!
//! Pure functions — constants in, text out. No I/O, no side effects.

/// Backtick delimiter for the template literal embedded in the generated
/// source. Kept as a named constant so the skeleton below stays readable.
const BACKTICK: char = '`';

/// Font stack for body text in the generated page.
const SF_TEXT: &str = "SF Pro Text, -apple-system, BlinkMacSystemFont, sans-serif";

/// Font stack for display text in the generated page.
const SF_DISPLAY: &str = "SF Pro Display, -apple-system, BlinkMacSystemFont, sans-serif";

/// Horizontal-rule character for banner comments in the generated source.
const RULE: &str = "─";

/// Total character width of a banner comment line.
const BANNER_WIDTH: usize = 112;

/// Build a `// ─── Title ───…` banner comment line, padded with the rule
/// character to [`BANNER_WIDTH`] characters.
pub fn banner(title: &str) -> String {
    let mut line = format!("// {} {} ", RULE.repeat(3), title);
    let used = line.chars().count();
    line.push_str(&RULE.repeat(BANNER_WIDTH.saturating_sub(used)));
    line
}

/// Assemble the full source text of the simulated account-linking page.
///
/// Single-pass interpolation of the constants above into a fixed skeleton:
/// comment header, import lines, font-stack declarations, the spinner
/// keyframe CSS inside a backtick literal, and the style-injection function.
/// The content is emitted as text only; nothing here parses or executes it.
pub fn link_account_source() -> String {
    format!(
        "/**
 * Wally – Link / Add Account
 *
 * 5-step simulated account-linking flow:
 *   type → bank → auth → connecting → success
 */

import React, {{ useState, useEffect }} from 'react';
import {{ useApp }}                      from '../../AppContext';
import * as Icons                      from '../shared/Icons';

const SF        = '{sf}';
const SF_DISPLAY= '{sf_display}';

{banner}
const SPIN_CSS = {bt}
@keyframes wallySpinLink {{
  to {{ transform: rotate(360deg); }}
}}
{bt};
function injectSpinCSS() {{
  if (document.getElementById('wally-spin-link-css')) return;
  const tag = document.createElement('style');
  tag.id          = 'wally-spin-link-css';
  tag.textContent = SPIN_CSS;
  document.head.appendChild(tag);
}}
",
        sf = SF_TEXT,
        sf_display = SF_DISPLAY,
        banner = banner("Spinner CSS (injected once)"),
        bt = BACKTICK,
    )
}

// ============================================================================
// TESTS
// ============================================================================
