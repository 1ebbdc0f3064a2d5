//! Print the validation rules and canonical slider text for a form declared
//! in TOML.
//!
//! Usage: `paramform <form.toml>`

use form_core::{FormDecl, ParameterForm, SliderReading};
use input_core::InputValueStore;
use std::error::Error;
use std::{env, fs, process};

fn main() {
    if let Err(err) = run() {
        eprintln!("paramform: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Some(path) = env::args().nth(1) else {
        return Err("usage: paramform <form.toml>".into());
    };
    let source = fs::read_to_string(&path).map_err(|err| format!("{path}: {err}"))?;
    let decl = FormDecl::from_toml_str(&source)?;

    let mut store = InputValueStore::new();
    let mut form = ParameterForm::from_decl(&decl, &mut store)?;
    log::debug!("bound {} field(s) from {path}", decl.fields.len());

    println!("{}", serde_json::to_string_pretty(&form.rules().to_validator_json())?);

    let ids: Vec<_> = form.fields().map(|(id, spec)| (id, spec.name.clone())).collect();
    for (id, name) in ids {
        let Some(reading) = form.slider_reading(id, &mut store) else {
            continue;
        };
        let text = store.get(id).unwrap_or_default();
        match reading {
            SliderReading::Range(low, high) => {
                println!("{name} = {text:?} (slider {low}..{high})")
            }
            SliderReading::Scalar(value) => println!("{name} = {text:?} (slider {value})"),
        }
    }
    Ok(())
}
