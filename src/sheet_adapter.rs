use serde_json::{json, Value};

use crate::worksheet_engine::{
    labels,
    models::{
        AlgebraQuestion, ArithmeticQuestion, EnglishSheet, HanziSheet, Item, Language,
        Operator, PoemExercise, Worksheet, WorksheetBody,
    },
    topics::{english, hanzi},
};

/// Algebra sheets follow their configured language; the other subjects have
/// one natural language.
fn sheet_language(body: &WorksheetBody) -> Language {
    match body {
        WorksheetBody::Algebra { language, .. } => *language,
        WorksheetBody::Poem { .. } | WorksheetBody::Hanzi(_) => Language::Zh,
        WorksheetBody::Arithmetic { .. } | WorksheetBody::English(_) => Language::En,
    }
}

/// Build one arithmetic entry; the split is drawn under the decomposed operand.
fn arithmetic_entry(n: usize, q: &ArithmeticQuestion) -> Value {
    let split = q.decomposition.map(|d| {
        json!({
            "under": if q.operator == Operator::Minus { "num1" } else { "num2" },
            "left": d.part1,
            "right": d.part2,
        })
    });
    json!({
        "number": n + 1,
        "id": q.id,
        "prompt": q.to_string(),
        "answer": q.answer,
        "split": split,
    })
}

fn price_row(item: &Item, language: Language) -> Value {
    json!({
        "id": item.id,
        "name": item.display_name(language),
        "emoji": item.emoji,
        "icon": item.icon,
        "price": labels::price(item.price, language),
    })
}

fn algebra_entry(n: usize, q: &AlgebraQuestion, language: Language) -> Value {
    let terms: Vec<Value> = q
        .items
        .iter()
        .map(|iq| json!({ "icon": iq.item.icon, "emoji": iq.item.emoji, "quantity": iq.quantity }))
        .collect();
    json!({
        "number": n + 1,
        "id": q.id,
        "expression": q.expression,
        "terms": terms,
        "answer": labels::price(q.total, language),
    })
}

fn poem_entry(e: &PoemExercise<'_>, show_pinyin: bool) -> Value {
    let pinyin = show_pinyin.then(|| e.pinyin_lines());
    json!({
        "id": e.id,
        "title": e.poem.title,
        "byline": format!("【{}】{}", e.poem.dynasty, e.poem.author),
        "lines": e.masked_lines(),
        "pinyin": pinyin,
    })
}

fn hanzi_pages(sheet: &HanziSheet) -> Value {
    let pages: Vec<Value> = sheet
        .pages()
        .map(|page| {
            let rows: Vec<Value> = page
                .chunks(hanzi::COLUMNS)
                .map(|row| {
                    Value::Array(
                        row.iter()
                            .map(|c| json!({
                                "char": c.character.to_string(),
                                "pinyin": if sheet.show_pinyin { c.pinyin.clone() } else { None },
                            }))
                            .collect(),
                    )
                })
                .collect();
            json!({ "rows": rows })
        })
        .collect();
    Value::Array(pages)
}

fn english_pages(sheet: &EnglishSheet) -> Value {
    let mut pages: Vec<Value> = sheet
        .pages()
        .enumerate()
        .map(|(p, words)| {
            let rows: Vec<Value> = words
                .iter()
                .enumerate()
                .map(|(i, w)| json!({ "number": p * english::ROWS_PER_PAGE + i + 1, "word": w }))
                .collect();
            json!({ "rows": rows, "blank_rows": 0 })
        })
        .collect();
    match pages.last_mut() {
        Some(last) => last["blank_rows"] = json!(sheet.blank_rows()),
        None => pages.push(json!({ "rows": [], "blank_rows": sheet.blank_rows() })),
    }
    Value::Array(pages)
}

/// Map a [`Worksheet`] to a render-ready JSON document.
///
/// Strings are already resolved for the sheet's language; a renderer only
/// lays the entries out.
pub fn to_sheet_json(sheet: &Worksheet) -> Value {
    let language = sheet_language(&sheet.body);
    let title = labels::sheet_title(sheet.subject, language);

    let content = match &sheet.body {
        WorksheetBody::Arithmetic { mode, max, questions } => json!({
            "subtitle": labels::arithmetic_title(*mode),
            "level": format!("{} level {}", mode.to_string().replace('-', " "), max),
            "entries": questions.iter().enumerate().map(|(n, q)| arithmetic_entry(n, q)).collect::<Vec<_>>(),
        }),

        WorksheetBody::Algebra { difficulty, language, sheet } => {
            let sets: Vec<Value> = sheet
                .item_pools
                .iter()
                .enumerate()
                .map(|(p, pool)| {
                    let entries: Vec<Value> = sheet
                        .questions
                        .iter()
                        .enumerate()
                        .filter(|(_, q)| q.pool_index == p)
                        .map(|(n, q)| algebra_entry(n, q, *language))
                        .collect();
                    json!({
                        "price_list_label": labels::price_list_label(*language),
                        "price_list": pool.iter().map(|i| price_row(i, *language)).collect::<Vec<_>>(),
                        "entries": entries,
                    })
                })
                .collect();
            json!({
                "subtitle": labels::difficulty_label(*difficulty, *language),
                "currency": labels::currency_symbol(*language),
                "sets": sets,
            })
        }

        WorksheetBody::Poem { difficulty, show_pinyin, exercises } => {
            let answer_key: Option<Vec<Value>> = exercises
                .first()
                .filter(|e| e.show_answers)
                .map(|_| {
                    exercises
                        .iter()
                        .enumerate()
                        .map(|(n, e)| json!({
                            "heading": format!("{}. {} - 【{}】{}", n + 1, e.poem.title, e.poem.dynasty, e.poem.author),
                            "lines": e.poem.lines.iter().map(|l| l.text).collect::<Vec<_>>(),
                            "hidden": e.answer_key(),
                        }))
                        .collect()
                });
            json!({
                "subtitle": labels::poem_difficulty_label(*difficulty),
                "entries": exercises.iter().map(|e| poem_entry(e, *show_pinyin)).collect::<Vec<_>>(),
                "answer_key": answer_key,
            })
        }

        WorksheetBody::Hanzi(h) => json!({
            "grid": h.grid,
            "trace": h.trace,
            "pages": hanzi_pages(h),
        }),

        WorksheetBody::English(e) => json!({
            "case": e.case,
            "pages": english_pages(e),
        }),
    };

    json!({
        "sheet_id": sheet.sheet_id,
        "subject": sheet.subject,
        "language": language,
        "title": title,
        "header": { "name": "", "date": "" },
        "content": content,
    })
}
