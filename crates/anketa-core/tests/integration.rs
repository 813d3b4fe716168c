//! Integration tests for scan_text() / scan_image() end-to-end pipeline.
//!
//! Uses a MockEngine that returns canned OCR text without invoking
//! tesseract, so these tests run without any OCR installation.

use anketa_core::error::AnketaError;
use anketa_core::model::ScanResult;
use anketa_core::parsing::MatchOptions;
use anketa_core::recognition::OcrEngine;
use anketa_core::scanner::Scanner;
use anketa_core::template::builtin::load_preset;
use anketa_core::template::parse_template_str;
use anketa_core::{scan_image, scan_text};

struct MockEngine {
    text: String,
    initialized: bool,
    shut_down: bool,
}

impl MockEngine {
    fn new(text: &str) -> Self {
        MockEngine {
            text: text.to_string(),
            initialized: false,
            shut_down: false,
        }
    }
}

impl OcrEngine for MockEngine {
    fn initialize(&mut self) -> Result<(), AnketaError> {
        self.initialized = true;
        Ok(())
    }

    fn recognize(&mut self, _image_bytes: &[u8]) -> Result<String, AnketaError> {
        if !self.initialized || self.shut_down {
            return Err(AnketaError::EngineNotInitialized("mock".into()));
        }
        Ok(self.text.clone())
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

const FILLED_FORM: &str = "\
МУЗЛОТО
Анкета гостя

Дата:
18.12
Номер столика:
5
Место игры:
Борщина куца
Довольны ли вы посещением Музлото?
Оценка: 9 из 10
Понравился ли вам плейлист?
10
Какие треки вы бы добавили?
Рок, Поп
Понравилась ли вам локация?
8
Понравилась ли вам кухня и бар?
хорошо
Устроил ли вас сервис, время подачи?
7
Понравилась ли вам работа ведущего?
10!
Сколько раз вы были на Музлото?
3
Оцените стоимость игры за билет
[x] Доступно
Знаете ли вы, что Музлото можно заказать на корпоратив или день рождения
да
Откуда вы о нас узнали?
Друзья
Ради чего вы обычно ходите на подобные вечеринки?
Развлечение
Что нам стоит улучшить?
Больше музыки
Если вы хотите, чтобы мы с вами связались - оставьте ваш номер телефона.
тел 8 915 123 45 67
";

fn scan(text: &str) -> ScanResult {
    let template = load_preset("muzloto-v1").unwrap();
    scan_text(text, 42.0, &template, &MatchOptions::default())
}

// ---------------------------------------------------------------------------
// Test 1: A fully filled form, every field captured and normalized
// ---------------------------------------------------------------------------
#[test]
fn filled_form_all_fields() {
    let result = scan(FILLED_FORM);

    assert!(result.success);
    assert_eq!(result.processing_time_ms, 42.0);
    assert_eq!(result.get("date"), Some("18.12"));
    assert_eq!(result.get("table_number"), Some("5"));
    assert_eq!(result.get("location"), Some("Борщина куца"));
    assert_eq!(result.get("satisfaction_rating"), Some("9"));
    assert_eq!(result.get("playlist_rating"), Some("10"));
    assert_eq!(result.get("tracks_to_add"), Some("Рок, Поп"));
    assert_eq!(result.get("location_rating"), Some("8"));
    // No score in the answer: raw text is kept.
    assert_eq!(result.get("kitchen_rating"), Some("хорошо"));
    assert_eq!(result.get("service_rating"), Some("7"));
    assert_eq!(result.get("host_rating"), Some("10"));
    assert_eq!(result.get("visits_count"), Some("3"));
    assert_eq!(result.get("ticket_price"), Some("доступно"));
    assert_eq!(result.get("know_booking"), Some("Да"));
    assert_eq!(result.get("source_info"), Some("Друзья"));
    assert_eq!(result.get("purpose"), Some("Развлечение"));
    assert_eq!(result.get("improvements"), Some("Больше музыки"));
    assert_eq!(result.get("phone_number"), Some("+79151234567"));

    assert_eq!(result.fields.len(), 17);
    assert_eq!(result.fields[0].name, "Дата:");
    // Field list keeps raw values.
    let phone = result.fields.last().unwrap();
    assert_eq!(phone.value, "тел 8 915 123 45 67");
}

// ---------------------------------------------------------------------------
// Test 2: Slot count always equals template size, unmatched are empty
// ---------------------------------------------------------------------------
#[test]
fn slot_count_matches_template_for_any_input() {
    let template = load_preset("muzloto-v1").unwrap();
    for text in ["", "\n\n", "совсем не анкета", "Дата:\n01.01", FILLED_FORM] {
        let result = scan_text(text, 0.0, &template, &MatchOptions::default());
        assert_eq!(result.answers().len(), template.len());
        let json = serde_json::to_value(&result).unwrap();
        for key in template.keys() {
            assert!(json.get(key).is_some(), "missing slot {key}");
        }
    }

    let result = scan_text("Дата:\n01.01", 0.0, &template, &MatchOptions::default());
    for answer in result.answers() {
        if answer.key != "date" {
            assert_eq!(answer.value, "", "slot {} should be empty", answer.key);
        }
    }
}

// ---------------------------------------------------------------------------
// Test 3: Empty text is not an error
// ---------------------------------------------------------------------------
#[test]
fn empty_text_yields_empty_successful_result() {
    let result = scan("");
    assert!(result.success);
    assert!(result.error_message.is_empty());
    assert!(result.fields.is_empty());
    assert!(result.answers().iter().all(|a| a.value.is_empty()));
}

// ---------------------------------------------------------------------------
// Test 4: Question printed right above another question
// ---------------------------------------------------------------------------
#[test]
fn question_without_answer_line_skips_next_question() {
    let template = parse_template_str(
        r#"{
            "name": "Lookahead",
            "version": "1",
            "entries": [
                { "phrase": "Вопрос B", "key": "b", "kind": "rating" },
                { "phrase": "Вопрос A", "key": "a", "kind": "rating" },
                { "phrase": "Вопрос C", "key": "c" }
            ]
        }"#,
    )
    .unwrap();

    let result = scan_text(
        "Вопрос A\nВопрос B\n5\nВопрос C",
        0.0,
        &template,
        &MatchOptions::default(),
    );
    assert_eq!(result.get("a"), Some("5"));
    assert_eq!(result.get("b"), Some(""));
    assert_eq!(result.get("c"), Some(""));
}

// ---------------------------------------------------------------------------
// Test 5: fields follow discovery order, not template order
// ---------------------------------------------------------------------------
#[test]
fn fields_follow_discovery_order() {
    let text = "Место игры:\nБар\nДата:\n18.12\nНомер столика:\n2";
    let result = scan(text);
    let names: Vec<&str> = result.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Место игры:", "Дата:", "Номер столика:"]);

    // Slots in the serialized object are still in template order.
    let json = serde_json::to_string(&result).unwrap();
    let date_pos = json.find("\"date\"").unwrap();
    let location_pos = json.find("\"location\"").unwrap();
    assert!(date_pos < location_pos);
}

// ---------------------------------------------------------------------------
// Test 6: Answer on the same physical line is not seen (lines are answers)
// ---------------------------------------------------------------------------
#[test]
fn answer_is_next_line_not_rest_of_question_line() {
    let result = scan("Номер столика: 7\nМесто игры:\nКлуб");
    // The line after the table question is itself a question, skipped.
    assert_eq!(result.get("table_number"), Some("Клуб"));
    // The location question was consumed by the lookahead.
    assert_eq!(result.get("location"), Some(""));
}

// ---------------------------------------------------------------------------
// Test 7: Revisit option gives skipped questions their own match
// ---------------------------------------------------------------------------
#[test]
fn revisit_option_matches_skipped_questions() {
    let template = load_preset("muzloto-v1").unwrap();
    let options = MatchOptions {
        revisit_skipped_questions: true,
    };
    let result = scan_text("Номер столика: 7\nМесто игры:\nКлуб", 0.0, &template, &options);
    assert_eq!(result.get("table_number"), Some("Клуб"));
    assert_eq!(result.get("location"), Some(""));
    assert_eq!(result.fields.len(), 2);
}

// ---------------------------------------------------------------------------
// Test 8: Phone normalization edge cases through the whole pipeline
// ---------------------------------------------------------------------------
#[test]
fn phone_variants() {
    let question = "Если вы хотите, чтобы мы с вами связались - оставьте ваш номер телефона.";
    let cases = [
        ("+7 (915) 123-45-67", "+79151234567"),
        ("+79151234567", "+79151234567"),
        ("79151234567", "+79151234567"),
        ("915 123 45 67", "+79151234567"),
        ("не хочу", ""),
    ];
    for (answer, expected) in cases {
        let result = scan(&format!("{question}\n{answer}"));
        assert_eq!(result.get("phone_number"), Some(expected), "answer {answer:?}");
    }
}

// ---------------------------------------------------------------------------
// Test 9: Windows line endings from the OCR engine
// ---------------------------------------------------------------------------
#[test]
fn crlf_text() {
    let result = scan("Дата:\r\n\r\n18.12\r\nМесто игры:\r\nБар\r\n");
    assert_eq!(result.get("date"), Some("18.12"));
    assert_eq!(result.get("location"), Some("Бар"));
}

// ---------------------------------------------------------------------------
// Test 10: scan_image through a mock engine
// ---------------------------------------------------------------------------
#[test]
fn scan_image_with_mock_engine() {
    let template = load_preset("muzloto-v1").unwrap();
    let mut engine = MockEngine::new(FILLED_FORM);
    engine.initialize().unwrap();
    let result = scan_image(&[], &mut engine, &template, &MatchOptions::default()).unwrap();
    assert!(result.success);
    assert_eq!(result.get("location"), Some("Борщина куца"));
    assert_eq!(result.raw_text, FILLED_FORM);
}

#[test]
fn scan_image_requires_initialized_engine() {
    let template = load_preset("muzloto-v1").unwrap();
    let mut engine = MockEngine::new(FILLED_FORM);
    let err = scan_image(&[], &mut engine, &template, &MatchOptions::default()).unwrap_err();
    assert!(matches!(err, AnketaError::EngineNotInitialized(_)));
}

// ---------------------------------------------------------------------------
// Test 11: Scanner lifecycle and stats
// ---------------------------------------------------------------------------
#[test]
fn scanner_lifecycle() {
    let template = load_preset("muzloto-v1").unwrap();
    let mut scanner =
        Scanner::initialize(MockEngine::new(FILLED_FORM), template, MatchOptions::default())
            .unwrap();

    let first = scanner.scan_image(&[1, 2, 3], "first.jpg");
    let second = scanner.scan_image(&[4, 5, 6], "second.jpg");
    assert!(first.success && second.success);
    assert!(first.missing_required(scanner.template()).is_empty());

    let stats = scanner.shutdown();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.succeeded, 2);
    assert_eq!(stats.last_source.as_deref(), Some("second.jpg"));
}

// ---------------------------------------------------------------------------
// Test 12: Transport truncation of raw text
// ---------------------------------------------------------------------------
#[test]
fn raw_text_truncated_for_transport() {
    let result = scan(FILLED_FORM).with_raw_text_limit(500);
    assert!(result.raw_text.chars().count() <= 500);
    assert!(FILLED_FORM.starts_with(&result.raw_text));
    // Slots are unaffected by truncation.
    assert_eq!(result.get("phone_number"), Some("+79151234567"));
}
