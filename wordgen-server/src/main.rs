use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::info;

use serde::{Deserialize, Serialize};
use wordgen_core::io::resolve_data_dir;
use wordgen_core::model::generation_input::{GenerationInput, GeneratorKind, DEFAULT_COUNT};
use wordgen_core::model::generator::Generator;
use wordgen_core::Language;

/// Command line and environment configuration of the server.
#[derive(Parser, Debug)]
#[command(name = "wordgen-server", version, about = "Serve generated words over HTTP")]
struct Config {
	/// Address to listen on
	#[arg(long, env = "WORDGEN_BIND", default_value = "127.0.0.1:5000")]
	bind: String,

	/// Directory holding model files (an `instance` sub-directory is preferred)
	#[arg(long, env = "WORDGEN_DATA")]
	data_dir: Option<PathBuf>,
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	generator: Option<String>, // words | model | syllable
	lang: Option<String>       // ru | en
}

/// Body of a `/v1/generate` response
#[derive(Serialize)]
struct GenerateResponse {
	words: Vec<String>,
	generator: GeneratorKind,
	lang: Language
}

#[derive(Serialize)]
struct LanguageInfo {
	lang: Language,
	contexts: usize
}

impl GenerateParams {
	/// Builds the generation input, applying defaults for missing parameters.
	fn generation_input(&self) -> Result<GenerationInput, String> {
		let kind = match &self.generator {
			None => GeneratorKind::default(),
			Some(s) => s.parse::<GeneratorKind>().map_err(|e| e.to_string())?,
		};
		let lang = match &self.lang {
			None => Language::default(),
			Some(s) => s.parse::<Language>().map_err(|e| e.to_string())?,
		};
		Ok(GenerationInput::new(kind, lang, self.count.unwrap_or(DEFAULT_COUNT)))
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Returns `count` words produced by the requested generator, together with
/// the generator and language that were applied.
#[get("/v1/generate")]
async fn get_generated(generator: web::Data<Generator>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let words = generator.generate(&mut rand::rng(), &input);
	HttpResponse::Ok().json(GenerateResponse { words, generator: input.kind, lang: input.lang })
}

/// HTTP GET endpoint `/v1/languages`
///
/// Lists loaded languages and the size of their models.
#[get("/v1/languages")]
async fn get_languages(generator: web::Data<Generator>) -> impl Responder {
	let languages: Vec<LanguageInfo> = generator
		.languages()
		.map(|lang| LanguageInfo {
			lang,
			contexts: generator.model(lang).map_or(0, |model| model.len()),
		})
		.collect();
	HttpResponse::Ok().json(languages)
}

/// Main entry point for the server.
///
/// Warms every language model before binding, then shares the generator
/// read-only between workers.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();
	let data_dir = resolve_data_dir(config.data_dir.as_deref());
	info!("Using model directory {}", data_dir.display());

	let generator = web::Data::new(Generator::warm(&data_dir)?);

	info!("Listening on {}", config.bind);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(generator.clone())
			.service(get_generated)
			.service(get_languages)
	})
		.bind(config.bind.as_str())?
		.run()
		.await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;
	use wordgen_core::TrigramModel;

	fn generator() -> web::Data<Generator> {
		web::Data::new(Generator::from_models([
			(Language::En, TrigramModel::train(["ant", "ant", "bat"], 0.5)),
		]))
	}

	#[actix_web::test]
	async fn generate_returns_requested_count() {
		let app = test::init_service(App::new().app_data(generator()).service(get_generated)).await;
		let req = test::TestRequest::get()
			.uri("/v1/generate?count=12&generator=model&lang=en")
			.to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["words"].as_array().unwrap().len(), 12);
		assert_eq!(body["generator"], "model");
		assert_eq!(body["lang"], "en");
	}

	#[actix_web::test]
	async fn generate_clamps_count() {
		let app = test::init_service(App::new().app_data(generator()).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?count=1").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["words"].as_array().unwrap().len(), 10);
		assert_eq!(body["generator"], "words");
		assert_eq!(body["lang"], "ru");
	}

	#[actix_web::test]
	async fn generate_rejects_unknown_generator() {
		let app = test::init_service(App::new().app_data(generator()).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?generator=markov").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn languages_lists_models() {
		let app = test::init_service(App::new().app_data(generator()).service(get_languages)).await;
		let req = test::TestRequest::get().uri("/v1/languages").to_request();
		let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body[0]["lang"], "en");
		assert_eq!(body[0]["contexts"], 7);
	}
}
