//! End-to-end flow over an in-memory data access facade: dashboard stats,
//! progress views, and report export through the real renderer, the
//! pulldown HTML exporter and local file storage.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};

use sinfonia::adapters::{
    LocalReportFileStorage, MarkdownReportRenderer, PulldownExportService,
};
use sinfonia::application::handlers::dashboard::{
    GetDashboardStatsHandler, GetDashboardStatsQuery,
};
use sinfonia::application::handlers::progress::{
    GetContentProgressHandler, GetContentProgressQuery,
};
use sinfonia::application::handlers::report::{
    ExportStudentReportHandler, ExportStudentReportQuery, SaveStudentReportHandler,
    SaveStudentReportQuery,
};
use sinfonia::domain::catalog::{Instrument, Method, Teacher};
use sinfonia::domain::foundation::{
    InstrumentFamily, InstrumentId, LearningPhase, LessonId, MethodId, Score, StaffRole,
    StudentId, TeacherId,
};
use sinfonia::domain::progress::ContentKind;
use sinfonia::domain::student::{Evaluation, Lesson, Student};
use sinfonia::ports::{CatalogReader, ExportFormat, ReaderError, StudentReader};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ─────────────────────────────────────────────────────────────────────────
// In-memory facade
// ─────────────────────────────────────────────────────────────────────────

struct InMemoryFacade {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    methods: Vec<Method>,
    instruments: Vec<Instrument>,
}

#[async_trait]
impl StudentReader for InMemoryFacade {
    async fn list_students(&self) -> Result<Vec<Student>, ReaderError> {
        Ok(self.students.clone())
    }

    async fn get_student(&self, id: StudentId) -> Result<Student, ReaderError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(ReaderError::StudentNotFound(id))
    }
}

#[async_trait]
impl CatalogReader for InMemoryFacade {
    async fn list_teachers(&self) -> Result<Vec<Teacher>, ReaderError> {
        Ok(self.teachers.clone())
    }

    async fn list_methods(&self) -> Result<Vec<Method>, ReaderError> {
        Ok(self.methods.clone())
    }

    async fn list_instruments(&self) -> Result<Vec<Instrument>, ReaderError> {
        Ok(self.instruments.clone())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn facade() -> Arc<InMemoryFacade> {
    let teacher_id = TeacherId::new();

    let gabriel = Student {
        id: StudentId::new(),
        name: "Gabriel Mendonça".to_string(),
        instrument: "Violino".to_string(),
        phase: LearningPhase::Fase3,
        teacher_id,
        active: true,
        enrollment_date: date(2023, 1, 15),
        lessons: vec![
            Lesson {
                id: LessonId::new(),
                date: date(2023, 10, 1),
                present: true,
                observation: "Boa postura, afinação precisa melhorar.".to_string(),
                exercises_mastered: vec!["Schmoll 21".to_string(), "Schmoll 22".to_string()],
                hymns_mastered: vec!["Hino 1".to_string(), "Hino 5".to_string()],
                evaluation: Some(Evaluation::new(
                    Score::try_new(8).unwrap(),
                    Score::try_new(7).unwrap(),
                    Score::try_new(7).unwrap(),
                    date(2023, 10, 1),
                )),
            },
            Lesson {
                id: LessonId::new(),
                date: date(2023, 10, 8),
                present: false,
                observation: String::new(),
                exercises_mastered: vec![],
                hymns_mastered: vec![],
                evaluation: None,
            },
            Lesson {
                id: LessonId::new(),
                date: date(2023, 10, 15),
                present: true,
                observation: "Evoluiu bem no arco.".to_string(),
                exercises_mastered: vec!["Schmoll 21".to_string()],
                hymns_mastered: vec!["Hino 10".to_string()],
                evaluation: Some(Evaluation::new(
                    Score::try_new(9).unwrap(),
                    Score::try_new(8).unwrap(),
                    Score::try_new(7).unwrap(),
                    date(2023, 10, 15),
                )),
            },
        ],
        is_orchestra_ready: false,
    };

    let ana = Student {
        id: StudentId::new(),
        name: "Ana Clara Souza".to_string(),
        instrument: "Órgão".to_string(),
        phase: LearningPhase::Rjm,
        teacher_id,
        active: true,
        enrollment_date: date(2022, 5, 20),
        lessons: vec![Lesson {
            id: LessonId::new(),
            date: date(2023, 9, 12),
            present: true,
            observation: "Leitura fluente.".to_string(),
            exercises_mastered: vec![],
            hymns_mastered: vec!["Hino 5".to_string()],
            evaluation: None,
        }],
        is_orchestra_ready: true,
    };

    Arc::new(InMemoryFacade {
        students: vec![gabriel, ana],
        teachers: vec![Teacher {
            id: teacher_id,
            name: "Ir. João Silva".to_string(),
            instruments: vec!["Violino".to_string()],
            role: StaffRole::Instructor,
        }],
        methods: vec![Method {
            id: MethodId::new(),
            name: "Schmoll".to_string(),
            description: Some("Método para piano e violino".to_string()),
            total_lessons: None,
            total_exercises: Some(120),
            has_phases: None,
            total_phases: None,
            instrument: Some("Violino".to_string()),
        }],
        instruments: vec![
            Instrument {
                id: InstrumentId::new(),
                name: "Violino".to_string(),
                family: InstrumentFamily::Cordas,
            },
            Instrument {
                id: InstrumentId::new(),
                name: "Órgão".to_string(),
                family: InstrumentFamily::Teclas,
            },
        ],
    })
}

// ─────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_stats_cover_the_catalog_instruments() {
    init_tracing();
    let facade = facade();

    let stats = GetDashboardStatsHandler::new(facade.clone())
        .handle(GetDashboardStatsQuery)
        .await
        .unwrap();

    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.active_students, 2);
    assert_eq!(stats.orchestra_ready, 1);

    // Every instrument with enrolled students is a registered instrument.
    let instruments = facade.list_instruments().await.unwrap();
    for name in stats.students_by_instrument.keys() {
        assert!(instruments.iter().any(|i| &i.name == name));
    }
}

#[tokio::test]
async fn hymn_progress_counts_distinct_students_in_numeric_order() {
    init_tracing();
    let facade = facade();

    let progress = GetContentProgressHandler::new(facade)
        .handle(GetContentProgressQuery {
            kind: ContentKind::Hymn,
            key_contains: None,
            student_id: None,
        })
        .await
        .unwrap();

    let keys: Vec<&str> = progress.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["Hino 1", "Hino 5", "Hino 10"]);

    let hino5 = progress.iter().find(|e| e.key == "Hino 5").unwrap();
    assert_eq!(hino5.count, 2);
    assert_eq!(hino5.students, vec!["Gabriel Mendonça", "Ana Clara Souza"]);
}

#[tokio::test]
async fn exercise_progress_matches_registered_method() {
    init_tracing();
    let facade = facade();

    let progress = GetContentProgressHandler::new(facade.clone())
        .handle(GetContentProgressQuery {
            kind: ContentKind::Exercise,
            key_contains: Some("schmoll".to_string()),
            student_id: None,
        })
        .await
        .unwrap();

    // Per-student dedup: Schmoll 21 appears in two of Gabriel's lessons but
    // counts once.
    assert_eq!(progress.len(), 2);
    for entry in &progress {
        assert_eq!(entry.count, 1);
    }

    // The keys belong to a method that applies to the violin.
    let methods = facade.list_methods().await.unwrap();
    let schmoll = &methods[0];
    assert!(schmoll.applies_to("Violino"));
    assert!(progress.iter().all(|e| e.key.starts_with(&schmoll.name)));
}

#[tokio::test]
async fn report_exports_to_html_and_is_stored_on_disk() {
    init_tracing();
    let facade = facade();
    let gabriel_id = facade.students[0].id;

    let export = ExportStudentReportHandler::new(
        facade,
        Arc::new(MarkdownReportRenderer::new()),
        Arc::new(PulldownExportService::new()),
    );

    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(LocalReportFileStorage::new(dir.path()));
    let handler = SaveStudentReportHandler::new(export, storage);

    let path = handler
        .handle(SaveStudentReportQuery {
            export: ExportStudentReportQuery {
                student_id: gabriel_id,
                format: ExportFormat::Html,
                generated_at: Utc.with_ymd_and_hms(2023, 11, 20, 9, 15, 0).unwrap(),
            },
        })
        .await
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Relatorio_Gabriel_Mendonça.html"
    );

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Relatorio Individual do Aluno"));
    assert!(html.contains("Gerado em: 20/11/2023 as 09:15"));
    assert!(html.contains("Gabriel Mendonça"));
    // Summary counts are raw sums: 3 exercises, 3 hymns over 3 lessons.
    assert!(html.contains("Exercicios Dominados"));
    assert!(html.contains("<td>3</td>"));
    // The absent lesson still shows up in the detail table.
    assert!(html.contains("Faltou"));
    // Footer carries the stamped page count on every page.
    assert!(html.contains("Pagina 1 de 2"));
    assert!(html.contains("Pagina 2 de 2"));
}

#[tokio::test]
async fn markdown_export_round_trips_without_the_export_service() {
    init_tracing();
    let facade = facade();
    let ana_id = facade.students[1].id;

    let handler = ExportStudentReportHandler::new(
        facade,
        Arc::new(MarkdownReportRenderer::new()),
        Arc::new(PulldownExportService::new()),
    );

    let document = handler
        .handle(ExportStudentReportQuery {
            student_id: ana_id,
            format: ExportFormat::Markdown,
            generated_at: Utc.with_ymd_and_hms(2023, 11, 20, 9, 15, 0).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(document.filename, "Relatorio_Ana_Clara_Souza.md");
    let markdown = String::from_utf8(document.content).unwrap();
    assert!(markdown.contains("**Status Orquestra:** APTO"));
    assert!(markdown.contains("| Total de Aulas | 1 |"));
}
