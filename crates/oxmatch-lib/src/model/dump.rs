//! Human-readable rendering of a match model.

use std::fmt::Write;

use oxmatch_core::Colors;

use super::{MatchMember, MatchModel};

/// Builder for rendering a model dump.
pub struct ModelPrinter<'m> {
    model: &'m MatchModel,
    colors: Colors,
}

impl<'m> ModelPrinter<'m> {
    pub fn new(model: &'m MatchModel) -> Self {
        Self {
            model,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;

        writeln!(w, "fields")?;
        for member in self.model.sorted_members() {
            self.format_member(w, member)?;
        }

        writeln!(w, "versions")?;
        for (version, names) in self.model.version_orders() {
            write!(w, "  {}{version} ({}){}:", c.dim, version.release(), c.reset)?;
            if names.is_empty() {
                writeln!(w, " {}-{}", c.dim, c.reset)?;
                continue;
            }
            for (i, name) in names.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(w, "{sep}{}{name}{}", c.name, c.reset)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn format_member(&self, w: &mut impl Write, member: &MatchMember) -> std::fmt::Result {
        let c = self.colors;
        write!(
            w,
            "  {}{}{}: {}{}{} {}@{}",
            c.name, member.name, c.reset, c.ty, member.value_type, c.reset, c.dim, member.order
        )?;
        if let Some(shift) = member.v1_wc_shift {
            write!(w, " v1<<{shift}")?;
        }
        if let Some(shift) = member.v2_wc_shift {
            write!(w, " v2<<{shift}")?;
        }
        if member.v2_full_mask {
            write!(w, " v2:mask")?;
        }
        writeln!(w, "{}", c.reset)
    }
}

impl MatchModel {
    pub fn printer(&self) -> ModelPrinter<'_> {
        ModelPrinter::new(self)
    }

    pub fn dump(&self) -> String {
        self.printer().render()
    }
}
