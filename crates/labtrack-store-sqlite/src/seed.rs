//! The seed catalogue and the loader that inserts it on first creation.
//!
//! Loading happens inside the transaction that creates the schema, subjects
//! first and labs second. A failing row is logged and counted; it never stops
//! the rows after it.

use labtrack_core::{lab::Lab, subject::Subject};
use rusqlite::Connection;

use crate::encode::{insert_lab, insert_subject};

// ─── Catalogue ───────────────────────────────────────────────────────────────

/// A fixed set of rows to load into a newly created store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
  pub subjects: Vec<Subject>,
  pub labs:     Vec<Lab>,
}

impl Catalogue {
  /// The catalogue every new labtrack store starts with.
  ///
  /// Titles are kept verbatim, line breaks and all; the card renderer splits
  /// them into lines.
  pub fn standard() -> Self {
    let subjects = vec![
      Subject::new(1, "Мережева безпека"),
      Subject::new(2, "Subject 2"),
      Subject::new(3, "Subject 3"),
    ];

    let labs = vec![
      Lab::new(
        1,
        1,
        "Налаштування механізмів безпеки комутаторів ETHERNET",
        "Дослідити принципи налаштування механізмів безпеки на комутаторах Cisco Catalyst",
      )
      .with_comment("ноу")
      .completed(),
      Lab::new(
        1,
        2,
        "ОНОВЛЕННЯ IOS, РЕЗЕРВНЕ КОПІЮВАННЯ \nТА ВІДНОВЛЕННЯ НАЛАШТУВАНЬ КОМУТАТОРА \n\
         З ВИКОРИСТАННЯМ ПРОТОКОЛУ TFTP\n",
        "Оновлення IOS, резервне копіювання та відновлення налаштувань комутатора \
         з використанням протоколу TFTP",
      )
      .started(),
      Lab::new(
        1,
        3,
        "ВИКОРИСТАННЯ СПИСКІВ КОНТРОЛЮ ДОСТУПУ ACL ДЛЯ УПРАВЛІННЯ МЕРЕЖЕВИМ ТРАФІКОМ\n",
        "Використання списків контролю доступу ACL для управління мережевим трафіком",
      )
      .started(),
      Lab::new(
        1,
        4,
        "ОВІДНОВЛЕННЯ ПАРОЛІВ НА КОМУТАТОРАХ \nТА  МАРШРУТИЗАТОРАХ Cisco",
        "Відновлення паролів на комутаторах та маршрутизаторах Cisco.",
      )
      .started(),
      Lab::new(
        1,
        5,
        "Конфігурація і перевірка IPsec VPN між двома пунктами (site-to-site) \
         за допомогою інтерфейсу командного рядка",
        "Конфігурація і перевірка IPsec VPN між двома пунктами (site-to-site) \
         за допомогою інтерфейсу командного рядка.",
      )
      .started(),
      Lab::new(
        1,
        6,
        "Забезпечення безпеки на 2-му рівні",
        "Налаштування безпеку на 2 рівні моделі OSI.",
      )
      .started(),
      Lab::new(2, 1, "еееее", "ккккк").with_comment("ноу").completed(),
    ];

    Self { subjects, labs }
  }
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// Outcome of a seed run. A partial seed is an accepted outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
  /// Subject rows inserted.
  pub subjects: usize,
  /// Lab rows inserted.
  pub labs:     usize,
  /// Rows that failed to insert and were skipped.
  pub failures: usize,
}

// ─── Loader ──────────────────────────────────────────────────────────────────

/// Insert every row of `catalogue`, subjects before labs.
///
/// Each row is its own statement. Errors are logged and counted, never
/// propagated.
pub(crate) fn load(conn: &Connection, catalogue: &Catalogue) -> SeedReport {
  let mut report = SeedReport::default();

  for subject in &catalogue.subjects {
    match insert_subject(conn, subject) {
      Ok(()) => report.subjects += 1,
      Err(e) => {
        tracing::warn!(subject_id = subject.id, error = %e, "seed: subject insert failed");
        report.failures += 1;
      }
    }
  }

  for lab in &catalogue.labs {
    match insert_lab(conn, lab) {
      Ok(()) => report.labs += 1,
      Err(e) => {
        tracing::warn!(lab = %lab.key(), error = %e, "seed: lab insert failed");
        report.failures += 1;
      }
    }
  }

  report
}
