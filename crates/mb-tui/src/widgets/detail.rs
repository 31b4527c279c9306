//! Detail panes beside the choice menus
//!
//! While the cursor moves over a race or class, the pane on the right
//! shows what picking it would mean: stat adjustments, skill numbers,
//! hit die, experience factor, infravision and innate traits. The class
//! pane folds the already-chosen race in so the player sees combined
//! numbers.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use mb_core::birth::{PointBuy, MAX_BIRTH_POINTS};
use mb_core::data::{modify_stat, stat_display, ClassDef, RaceDef, RaceFlags, SkillTable, Stat};

use crate::theme::Theme;

fn adj_line(label: &str, adj: &[i16; mb_core::STAT_MAX]) -> String {
    let mut line = format!("{label:<6}");
    for stat in Stat::ALL {
        line.push_str(&format!(" {}{:+}", stat.abbr(), adj[stat.index()]));
    }
    line
}

fn skill_lines(skills: &SkillTable, out: &mut Vec<String>) {
    out.push(format!(
        "Hit/Shoot/Throw: {:+}/{:+}/{:+}",
        skills.melee, skills.bow, skills.throwing
    ));
    out.push(format!(
        "Disarm/Devices/Save: {:+}/{:+}/{:+}",
        skills.disarm, skills.device, skills.save
    ));
    out.push(format!(
        "Stealth/Dig/Search: {:+}/{:+}/{:+}",
        skills.stealth, skills.digging, skills.search
    ));
}

fn render_pane(title: &str, lines: Vec<String>, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let text: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.text))))
        .collect();
    Paragraph::new(text).render(inner, buf);
}

/// Pane shown while the race menu is active
pub struct RaceDetail<'a> {
    race: &'a RaceDef,
    theme: &'a Theme,
}

impl<'a> RaceDetail<'a> {
    pub fn new(race: &'a RaceDef, theme: &'a Theme) -> Self {
        Self { race, theme }
    }
}

impl Widget for RaceDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let r = self.race;
        let mut lines = vec![adj_line("Stats:", &r.adj)];
        skill_lines(&r.skills, &mut lines);
        lines.push(format!("Hit die: {}  XP mod: {}%", r.hit_die, r.exp_mod));
        if r.infra > 0 {
            lines.push(format!("Infravision: {} ft", r.infra * 10));
        }
        for flag in RaceFlags::DISPLAY {
            if r.flags.contains(flag) {
                lines.push(RaceFlags::describe(flag).to_string());
            }
        }
        render_pane(r.name, lines, self.theme, area, buf);
    }
}

/// Pane shown while the class menu is active; race influence included
pub struct ClassDetail<'a> {
    race: &'a RaceDef,
    class: &'a ClassDef,
    theme: &'a Theme,
}

impl<'a> ClassDetail<'a> {
    pub fn new(race: &'a RaceDef, class: &'a ClassDef, theme: &'a Theme) -> Self {
        Self { race, class, theme }
    }
}

impl Widget for ClassDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (r, c) = (self.race, self.class);
        let mut combined_adj = [0i16; mb_core::STAT_MAX];
        for i in 0..mb_core::STAT_MAX {
            combined_adj[i] = r.adj[i] + c.adj[i];
        }
        let mut lines = vec![adj_line("Stats:", &combined_adj)];
        skill_lines(&r.skills.combined(&c.skills), &mut lines);
        lines.push(format!(
            "Hit die: {}  XP mod: {}%",
            r.hit_die + c.hit_die,
            r.exp_mod + c.exp_mod
        ));
        if let Some(realm) = c.realm {
            lines.push(format!("Learns {realm} magic"));
        }
        render_pane(c.name, lines, self.theme, area, buf);
    }
}

/// The point-buy table: one row per stat with base value, the value
/// after race and class adjustments, and the cost of the current level
pub struct PointCostDetail<'a> {
    engine: &'a PointBuy,
    race: &'a RaceDef,
    class: &'a ClassDef,
    theme: &'a Theme,
}

impl<'a> PointCostDetail<'a> {
    pub fn new(
        engine: &'a PointBuy,
        race: &'a RaceDef,
        class: &'a ClassDef,
        theme: &'a Theme,
    ) -> Self {
        Self {
            engine,
            race,
            class,
            theme,
        }
    }
}

impl Widget for PointCostDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Point-based stats")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let header = format!("{:<14} {:>5} {:>6} {:>5}", "Stat", "Base", "Final", "Cost");
        let mut lines = vec![Line::from(Span::styled(
            header,
            Style::default().fg(self.theme.header),
        ))];

        for stat in Stat::ALL {
            let i = stat.index();
            let base = self.engine.values()[i];
            let final_val = modify_stat(base, self.race.adj[i] + self.class.adj[i]);
            let row = format!(
                "{:<14} {:>5} {:>6} {:>5}",
                stat.name(),
                base,
                stat_display(final_val),
                self.engine.cost_of(i)
            );
            let style = if i == self.engine.cursor() {
                Style::default()
                    .fg(self.theme.cursor_fg)
                    .bg(self.theme.cursor_bg)
            } else {
                Style::default().fg(self.theme.text)
            };
            lines.push(Line::from(Span::styled(row, style)));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "Points spent: {} / {}",
                self.engine.total_cost(),
                MAX_BIRTH_POINTS
            ),
            Style::default().fg(self.theme.value),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
