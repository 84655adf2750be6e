//! Difference report between a JSON snapshot and a SQL dump.
//!
//! Per table the report is a symmetric difference by id: records in the
//! snapshot but missing from the dump, records in the dump but missing
//! from the snapshot, and a field-by-field listing for ids present on
//! both sides. Timestamps are compared at second precision.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDateTime;

use crate::dump::Dump;
use crate::record::{BaseWeaponRecord, EmployeeRecord, WeaponRecord};
use crate::snapshot::Snapshot;

/// One table's comparison outcome.
#[derive(Debug)]
pub struct TableDiff {
    pub json_count: usize,
    pub sql_count: usize,
    pub lines: Vec<String>,
}

impl TableDiff {
    pub fn is_clean(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The full three-table report.
#[derive(Debug)]
pub struct Report {
    pub weapons: TableDiff,
    pub employees: TableDiff,
    pub base_weapons: TableDiff,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.weapons.is_clean() && self.employees.is_clean() && self.base_weapons.is_clean()
    }
}

/// Compare a snapshot against a dump.
pub fn reconcile(snapshot: &Snapshot, dump: &Dump) -> Report {
    Report {
        weapons: diff_weapons(&snapshot.weapons, &dump.weapons),
        employees: diff_employees(&snapshot.employees, &dump.employees),
        base_weapons: diff_base_weapons(&snapshot.base_weapons, &dump.base_weapons),
    }
}

fn diff_weapons(json: &[WeaponRecord], sql: &[WeaponRecord]) -> TableDiff {
    diff_table(
        json,
        sql,
        |w| w.id,
        |id| format!("Arme manquante dans SQL: ID {id}"),
        |id| format!("Arme supplémentaire dans SQL: ID {id}"),
        |j, s, lines| {
            let diff = |field: &str, a: &dyn fmt::Display, b: &dyn fmt::Display| {
                format!("Différence pour l'arme {}, {field}: JSON={a}, SQL={b}", j.id)
            };
            if timestamps_differ(&j.horodateur, &s.horodateur) {
                lines.push(diff("horodateur", &j.horodateur, &s.horodateur));
            }
            if j.employe_id != s.employe_id {
                lines.push(diff("employe_id", &j.employe_id, &s.employe_id));
            }
            if j.detenteur != s.detenteur {
                lines.push(diff("detenteur", &j.detenteur, &s.detenteur));
            }
            if j.nom_arme != s.nom_arme {
                lines.push(diff("nom_arme", &j.nom_arme, &s.nom_arme));
            }
            if j.serigraphie != s.serigraphie {
                lines.push(diff("serigraphie", &j.serigraphie, &s.serigraphie));
            }
            if j.prix != s.prix {
                lines.push(diff("prix", &j.prix, &s.prix));
            }
        },
    )
}

fn diff_employees(json: &[EmployeeRecord], sql: &[EmployeeRecord]) -> TableDiff {
    diff_table(
        json,
        sql,
        |e| e.id,
        |id| format!("Employé manquant dans SQL: ID {id}"),
        |id| format!("Employé supplémentaire dans SQL: ID {id}"),
        |j, s, lines| {
            let diff = |field: &str, a: &dyn fmt::Display, b: &dyn fmt::Display| {
                format!(
                    "Différence pour l'employé {}, {field}: JSON={a}, SQL={b}",
                    j.id
                )
            };
            if j.name != s.name {
                lines.push(diff("name", &j.name, &s.name));
            }
            if j.color != s.color {
                lines.push(diff("color", &fmt_opt(&j.color), &fmt_opt(&s.color)));
            }
            if j.role != s.role {
                lines.push(diff("role", &j.role, &s.role));
            }
        },
    )
}

fn diff_base_weapons(json: &[BaseWeaponRecord], sql: &[BaseWeaponRecord]) -> TableDiff {
    diff_table(
        json,
        sql,
        |b| b.id,
        |id| format!("Arme de base manquante dans SQL: ID {id}"),
        |id| format!("Arme de base supplémentaire dans SQL: ID {id}"),
        |j, s, lines| {
            let diff = |field: &str, a: &dyn fmt::Display, b: &dyn fmt::Display| {
                format!(
                    "Différence pour l'arme de base {}, {field}: JSON={a}, SQL={b}",
                    j.id
                )
            };
            if j.nom != s.nom {
                lines.push(diff("nom", &j.nom, &s.nom));
            }
            if j.prix_defaut != s.prix_defaut {
                lines.push(diff("prix_defaut", &j.prix_defaut, &s.prix_defaut));
            }
        },
    )
}

/// Shared id-matching skeleton: missing in SQL, field diffs for matched
/// ids, extras in SQL, in that order.
fn diff_table<T>(
    json: &[T],
    sql: &[T],
    id_of: fn(&T) -> i64,
    missing: impl Fn(i64) -> String,
    extra: impl Fn(i64) -> String,
    compare_fields: impl Fn(&T, &T, &mut Vec<String>),
) -> TableDiff {
    let sql_by_id: HashMap<i64, &T> = sql.iter().map(|r| (id_of(r), r)).collect();
    let mut matched = std::collections::HashSet::new();
    let mut lines = Vec::new();

    for j in json {
        let id = id_of(j);
        match sql_by_id.get(&id) {
            None => lines.push(missing(id)),
            Some(s) => {
                matched.insert(id);
                compare_fields(j, s, &mut lines);
            }
        }
    }

    for s in sql {
        let id = id_of(s);
        if !matched.contains(&id) {
            lines.push(extra(id));
        }
    }

    TableDiff {
        json_count: json.len(),
        sql_count: sql.len(),
        lines,
    }
}

fn fmt_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

/// Compare two timestamps at second precision. Fractional seconds and a
/// timezone suffix are dropped before parsing; unparseable values fall
/// back to raw string comparison.
fn timestamps_differ(a: &str, b: &str) -> bool {
    match (parse_seconds(a), parse_seconds(b)) {
        (Some(a), Some(b)) => a != b,
        _ => a.trim() != b.trim(),
    }
}

fn parse_seconds(raw: &str) -> Option<NaiveDateTime> {
    let truncated = raw
        .trim()
        .split(['.', '+'])
        .next()
        .unwrap_or_default()
        .trim();
    NaiveDateTime::parse_from_str(truncated, "%Y-%m-%d %H:%M:%S").ok()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "armes", &self.weapons)?;
        writeln!(f)?;
        write_section(f, "employés", &self.employees)?;
        writeln!(f)?;
        write_section(f, "armes de base", &self.base_weapons)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, label: &str, diff: &TableDiff) -> fmt::Result {
    writeln!(f, "Comparaison des {label}:")?;
    writeln!(f, "Nombre d'{label} dans JSON: {}", diff.json_count)?;
    writeln!(f, "Nombre d'{label} dans SQL: {}", diff.sql_count)?;
    writeln!(f)?;
    writeln!(f, "Différences trouvées dans les {label}:")?;
    if diff.is_clean() {
        writeln!(f, "Aucune différence trouvée !")
    } else {
        for line in &diff.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
