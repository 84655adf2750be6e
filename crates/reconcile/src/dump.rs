//! Plain-text `pg_dump` parsing.
//!
//! Only the `COPY public.<table> ... FROM stdin;` data blocks are read;
//! everything else in the dump (DDL, sequences, comments) is ignored. A
//! block ends with a line containing only `\.`, and its fields are
//! tab-separated in table column order, with `\N` standing for NULL.

use armurerie_core::error::CoreError;
use regex::Regex;

use crate::record::{BaseWeaponRecord, EmployeeRecord, WeaponRecord};

/// The three table data blocks extracted from a dump.
#[derive(Debug)]
pub struct Dump {
    pub weapons: Vec<WeaponRecord>,
    pub employees: Vec<EmployeeRecord>,
    pub base_weapons: Vec<BaseWeaponRecord>,
}

impl Dump {
    /// Parse the dump text. A table whose `COPY` block is absent parses
    /// as empty, matching a dump taken before the table had any rows.
    pub fn parse(sql: &str) -> Result<Self, CoreError> {
        Ok(Self {
            weapons: parse_block(sql, "weapons", parse_weapon_line)?,
            employees: parse_block(sql, "employees", parse_employee_line)?,
            base_weapons: parse_block(sql, "base_weapons", parse_base_weapon_line)?,
        })
    }
}

fn copy_block_re(table: &str) -> Regex {
    Regex::new(&format!(
        r"(?s)COPY public\.{table}.*?FROM stdin;\n(.*?)\\\."
    ))
    .expect("valid regex")
}

fn parse_block<T>(
    sql: &str,
    table: &str,
    parse_line: fn(&str, &[&str]) -> Result<T, CoreError>,
) -> Result<Vec<T>, CoreError> {
    let Some(captures) = copy_block_re(table).captures(sql) else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for line in captures[1].trim().split('\n') {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        rows.push(parse_line(table, &fields)?);
    }
    Ok(rows)
}

fn parse_weapon_line(table: &str, fields: &[&str]) -> Result<WeaponRecord, CoreError> {
    let [id, horodateur, employe_id, detenteur, nom_arme, serigraphie, prix] = fields else {
        return Err(field_count_error(table, 7, fields.len()));
    };
    Ok(WeaponRecord {
        id: parse_int(table, "id", id)?,
        horodateur: (*horodateur).to_string(),
        employe_id: parse_int(table, "employe_id", employe_id)?,
        detenteur: (*detenteur).to_string(),
        nom_arme: (*nom_arme).to_string(),
        serigraphie: (*serigraphie).to_string(),
        prix: parse_int(table, "prix", prix)?,
    })
}

fn parse_employee_line(table: &str, fields: &[&str]) -> Result<EmployeeRecord, CoreError> {
    let [id, name, color, role] = fields else {
        return Err(field_count_error(table, 4, fields.len()));
    };
    Ok(EmployeeRecord {
        id: parse_int(table, "id", id)?,
        name: (*name).to_string(),
        color: parse_nullable(color),
        role: (*role).to_string(),
    })
}

fn parse_base_weapon_line(table: &str, fields: &[&str]) -> Result<BaseWeaponRecord, CoreError> {
    let [id, nom, prix_defaut] = fields else {
        return Err(field_count_error(table, 3, fields.len()));
    };
    Ok(BaseWeaponRecord {
        id: parse_int(table, "id", id)?,
        nom: (*nom).to_string(),
        prix_defaut: parse_int(table, "prix_defaut", prix_defaut)?,
    })
}

fn parse_nullable(field: &str) -> Option<String> {
    if field == r"\N" {
        None
    } else {
        Some(field.to_string())
    }
}

fn parse_int(table: &str, column: &str, raw: &str) -> Result<i64, CoreError> {
    raw.parse().map_err(|_| {
        CoreError::Validation(format!(
            "dump table {table}: column {column} is not an integer: '{raw}'"
        ))
    })
}

fn field_count_error(table: &str, expected: usize, got: usize) -> CoreError {
    CoreError::Validation(format!(
        "dump table {table}: row has {got} fields, expected {expected}"
    ))
}
