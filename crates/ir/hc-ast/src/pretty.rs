//! Indented outline of an [`Idspace`]
//!
//! One declaration per line, nested packages and component clauses indented
//! by two spaces. The format is stable; snapshot tests depend on it.

use crate::{Declaration, IdDef, Idspace, ModuleDec, SubprogramDecl, TypeDef};
use hc_intern::Interner;
use std::fmt;

/// Display adapter returned by [`outline`]
pub struct Outline<'a> {
    idspace: &'a Idspace,
    interner: &'a Interner,
}

/// Renders `idspace` with names resolved through `interner`
pub fn outline<'a>(idspace: &'a Idspace, interner: &'a Interner) -> Outline<'a> {
    Outline { idspace, interner }
}

impl fmt::Display for Outline<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printer = Printer {
            interner: self.interner,
        };
        printer.idspace(formatter, self.idspace, 0)
    }
}

struct Printer<'a> {
    interner: &'a Interner,
}

impl Printer<'_> {
    fn idspace(&self, out: &mut fmt::Formatter<'_>, idspace: &Idspace, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        write!(out, "package {}", self.interner.resolve(&idspace.name))?;
        if !idspace.defs_only {
            write!(out, " (with body)")?;
        }
        writeln!(out)?;
        for decl in &idspace.objs {
            self.declaration(out, decl, depth + 1)?;
        }
        Ok(())
    }

    fn declaration(&self, out: &mut fmt::Formatter<'_>, decl: &Declaration, depth: usize) -> fmt::Result {
        match decl {
            Declaration::Package(inner) => self.idspace(out, inner, depth),
            Declaration::Component(module) => self.component(out, module, depth),
            Declaration::Subprogram(subprogram) => {
                indent(out, depth)?;
                self.subprogram(out, subprogram)?;
                writeln!(out)
            }
            Declaration::Type(ty) => {
                indent(out, depth)?;
                write!(out, "type {}", self.interner.resolve(&ty.name))?;
                match &ty.definition {
                    TypeDef::Enumeration(literals) => {
                        let names: Vec<&str> = literals
                            .iter()
                            .map(|literal| self.interner.resolve(literal))
                            .collect();
                        writeln!(out, " is ({})", names.join(", "))
                    }
                    TypeDef::Incomplete => writeln!(out),
                    TypeDef::Other(definition) => writeln!(out, " is {}", definition.text),
                }
            }
            Declaration::Subtype(subtype) => {
                indent(out, depth)?;
                writeln!(
                    out,
                    "subtype {} is {}",
                    self.interner.resolve(&subtype.name),
                    subtype.indication.text
                )
            }
            Declaration::Constant(def) | Declaration::Signal(def) | Declaration::Variable(def) => {
                indent(out, depth)?;
                write!(out, "{} ", def.kind.keyword())?;
                self.id_def(out, def)?;
                writeln!(out)
            }
        }
    }

    fn component(&self, out: &mut fmt::Formatter<'_>, module: &ModuleDec, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        writeln!(out, "component {}", self.interner.resolve(&module.name))?;
        for def in module.generics.iter().chain(&module.ports) {
            indent(out, depth + 1)?;
            write!(out, "{} ", def.kind.keyword())?;
            self.id_def(out, def)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn subprogram(&self, out: &mut fmt::Formatter<'_>, subprogram: &SubprogramDecl) -> fmt::Result {
        write!(
            out,
            "{} {}",
            subprogram.kind.keyword(),
            self.interner.resolve(&subprogram.name)
        )?;
        if !subprogram.params.is_empty() {
            write!(out, "(")?;
            for (index, param) in subprogram.params.iter().enumerate() {
                if index > 0 {
                    write!(out, "; ")?;
                }
                self.id_def(out, param)?;
            }
            write!(out, ")")?;
        }
        if let Some(return_type) = &subprogram.return_type {
            write!(out, " return {}", return_type.text)?;
        }
        Ok(())
    }

    /// `name : [mode ]type[ := value]`
    fn id_def(&self, out: &mut fmt::Formatter<'_>, def: &IdDef) -> fmt::Result {
        write!(out, "{}", self.interner.resolve(&def.name))?;
        if def.direction.is_some() || def.ty.is_some() {
            write!(out, " :")?;
        }
        if let Some(direction) = def.direction {
            write!(out, " {}", direction.keyword())?;
        }
        if let Some(ty) = &def.ty {
            write!(out, " {}", ty.text)?;
        }
        if let Some(value) = &def.value {
            write!(out, " := {}", value.text)?;
        }
        Ok(())
    }
}

fn indent(out: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    write!(out, "{:width$}", "", width = depth * 2)
}
