//! Report assembler - builds the paginated report for one student.
//!
//! Deterministic given the student data and the caller-supplied timestamp;
//! the system clock is never read here. Layout is two-pass: blocks are laid
//! onto pages against a fixed line budget first, then every footer is
//! stamped with the final page count.

use chrono::{DateTime, Utc};

use crate::domain::foundation::Score;
use crate::domain::student::{Lesson, Student};

use super::document::{
    format_date, format_generated_at, report_file_stem, IdentityBlock, PageFooter, ReportBlock,
    ReportPage, ReportTable, StudentReport, ABSENT_LABEL, FOOTER_LABEL, HYMN_PREFIX,
    ORCHESTRA_READY_LABEL, ORCHESTRA_STUDYING_LABEL, PLACEHOLDER, PRESENT_LABEL, REPORT_TITLE,
};

/// Lines available per page.
const PAGE_LINE_BUDGET: usize = 40;

/// Lines a table consumes before its rows (title and header row).
const TABLE_CHROME_LINES: usize = 3;

/// Lines consumed by the header band.
const HEADER_BAND_LINES: usize = 4;

/// Lines consumed by the identity block.
const IDENTITY_LINES: usize = 7;

/// Assembles the full paginated report for one student.
pub fn assemble(student: &Student, generated_at: DateTime<Utc>) -> StudentReport {
    let sections = report_sections(student, generated_at);
    StudentReport {
        file_stem: report_file_stem(&student.name),
        pages: paginate(sections),
    }
}

/// Produces the report's ordered sections, before pagination.
///
/// Section order is fixed: header band, identity, summary metrics, a page
/// break, the evaluation history (ascending by date) and the lesson details
/// (descending by date). Empty histories yield empty tables, never missing
/// ones.
pub fn report_sections(student: &Student, generated_at: DateTime<Utc>) -> Vec<ReportBlock> {
    vec![
        ReportBlock::HeaderBand {
            title: REPORT_TITLE.to_string(),
            generated_at: format_generated_at(generated_at),
        },
        ReportBlock::Identity(IdentityBlock {
            name: student.name.clone(),
            instrument: student.instrument.clone(),
            phase: student.phase.label().to_string(),
            enrollment_date: format_date(student.enrollment_date),
            orchestra_status: if student.is_orchestra_ready {
                ORCHESTRA_READY_LABEL.to_string()
            } else {
                ORCHESTRA_STUDYING_LABEL.to_string()
            },
        }),
        ReportBlock::Table(summary_table(student)),
        ReportBlock::PageBreak,
        ReportBlock::Table(evaluation_table(student)),
        ReportBlock::Table(lesson_table(student)),
    ]
}

fn summary_table(student: &Student) -> ReportTable {
    // Raw sums across lessons; repeats count, unlike the aggregator.
    ReportTable::new(
        "Resumo de Aproveitamento",
        &["Metrica", "Total Realizado"],
        vec![
            vec![
                "Total de Aulas".to_string(),
                student.lessons.len().to_string(),
            ],
            vec![
                "Exercicios Dominados".to_string(),
                student.total_exercises_mastered().to_string(),
            ],
            vec![
                "Hinos Dominados".to_string(),
                student.total_hymns_mastered().to_string(),
            ],
        ],
    )
}

fn evaluation_table(student: &Student) -> ReportTable {
    let mut evaluated: Vec<&Lesson> = student
        .lessons
        .iter()
        .filter(|l| l.has_evaluation())
        .collect();
    // Stable: equal dates keep history order.
    evaluated.sort_by(|a, b| a.date.cmp(&b.date));

    let rows = evaluated
        .iter()
        .filter_map(|l| l.evaluation.as_ref().map(|e| (l.date, e)))
        .map(|(date, e)| {
            vec![
                format_date(date),
                score_or_dash(e.technique),
                score_or_dash(e.rhythm),
                score_or_dash(e.reading),
            ]
        })
        .collect();

    ReportTable::new(
        "Historico de Avaliacoes Tecnicas",
        &["Data", "Tecnica", "Ritmo", "Leitura"],
        rows,
    )
}

fn lesson_table(student: &Student) -> ReportTable {
    let mut lessons: Vec<&Lesson> = student.lessons.iter().collect();
    lessons.sort_by(|a, b| b.date.cmp(&a.date));

    let rows = lessons
        .iter()
        .map(|l| {
            let presence = if l.present {
                PRESENT_LABEL
            } else {
                ABSENT_LABEL
            };
            vec![
                format_date(l.date),
                presence.to_string(),
                text_or_dash(&l.observation),
                mastered_content(l),
            ]
        })
        .collect();

    ReportTable::new(
        "Detalhes das Ultimas Aulas",
        &["Data", "Presenca", "Observacoes", "Conteudo Dominado"],
        rows,
    )
}

/// Joins exercise labels and prefixed hymn labels into one cell.
fn mastered_content(lesson: &Lesson) -> String {
    let combined: Vec<String> = lesson
        .exercises_mastered
        .iter()
        .cloned()
        .chain(
            lesson
                .hymns_mastered
                .iter()
                .map(|h| format!("{}{}", HYMN_PREFIX, h)),
        )
        .collect();
    if combined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        combined.join(", ")
    }
}

fn score_or_dash(score: Option<Score>) -> String {
    score
        .map(|s| s.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn text_or_dash(text: &str) -> String {
    if text.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────

fn paginate(sections: Vec<ReportBlock>) -> Vec<ReportPage> {
    let mut pages: Vec<Vec<ReportBlock>> = Vec::new();
    let mut current: Vec<ReportBlock> = Vec::new();
    let mut used = 0usize;

    for block in sections {
        match block {
            ReportBlock::PageBreak => {
                if !current.is_empty() {
                    pages.push(std::mem::take(&mut current));
                    used = 0;
                }
            }
            ReportBlock::Table(table) => {
                place_table(&mut pages, &mut current, &mut used, table);
            }
            other => {
                let cost = block_lines(&other);
                if used + cost > PAGE_LINE_BUDGET && !current.is_empty() {
                    pages.push(std::mem::take(&mut current));
                    used = 0;
                }
                used += cost;
                current.push(other);
            }
        }
    }
    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    // Second pass: the footer needs the total page count.
    let page_count = pages.len() as u32;
    pages
        .into_iter()
        .enumerate()
        .map(|(i, blocks)| ReportPage {
            number: i as u32 + 1,
            blocks,
            footer: PageFooter {
                label: FOOTER_LABEL.to_string(),
                page: i as u32 + 1,
                page_count,
            },
        })
        .collect()
}

/// Places a table, splitting its rows across pages when they do not fit.
/// Continuation chunks repeat the headers and are flagged as continued.
fn place_table(
    pages: &mut Vec<Vec<ReportBlock>>,
    current: &mut Vec<ReportBlock>,
    used: &mut usize,
    table: ReportTable,
) {
    let min_lines = TABLE_CHROME_LINES + usize::from(!table.rows.is_empty());
    if *used + min_lines > PAGE_LINE_BUDGET && !current.is_empty() {
        pages.push(std::mem::take(current));
        *used = 0;
    }

    let mut rows = table.rows;
    let mut continued = table.continued;
    loop {
        let capacity = PAGE_LINE_BUDGET
            .saturating_sub(*used)
            .saturating_sub(TABLE_CHROME_LINES);
        if rows.len() <= capacity {
            *used += TABLE_CHROME_LINES + rows.len();
            current.push(ReportBlock::Table(ReportTable {
                title: table.title,
                headers: table.headers,
                rows,
                continued,
            }));
            return;
        }

        let rest = rows.split_off(capacity.max(1));
        current.push(ReportBlock::Table(ReportTable {
            title: table.title.clone(),
            headers: table.headers.clone(),
            rows,
            continued,
        }));
        pages.push(std::mem::take(current));
        *used = 0;
        rows = rest;
        continued = true;
    }
}

fn block_lines(block: &ReportBlock) -> usize {
    match block {
        ReportBlock::HeaderBand { .. } => HEADER_BAND_LINES,
        ReportBlock::Identity(_) => IDENTITY_LINES,
        ReportBlock::Table(table) => TABLE_CHROME_LINES + table.rows.len(),
        ReportBlock::PageBreak => 0,
    }
}
