//! Multipart body encoding.

mod test_utils;

use anemo_client::{
    AudioResponseFormat, CreateImageEditRequest, CreateImageVariationRequest,
    CreateTranscriptionRequest, CreateTranslationRequest, FilePart, FormValue, ImageResponseFormat,
    ImageSize, MultipartBody, RequestOptions, UploadFileRequest,
};
use serde_json::json;
use test_utils::{header, mock_client};

#[test]
fn test_every_set_field_is_a_distinct_form_field() -> Result<(), Box<dyn std::error::Error>> {
    let request = CreateImageEditRequest::builder()
        .image(FilePart::new("otter.png", vec![1, 2, 3]).with_mime("image/png"))
        .mask(FilePart::new("mask.png", vec![9]))
        .prompt("An otter wearing a beret")
        .n(2)
        .size(ImageSize::Medium)
        .response_format(ImageResponseFormat::B64Json)
        .user("user-1")
        .build()?;

    let form = request.to_form();
    assert_eq!(
        form.field_names(),
        vec!["image", "mask", "prompt", "n", "size", "response_format", "user"]
    );
    assert_eq!(form.get("size"), Some(&FormValue::Text("512x512".to_string())));
    assert_eq!(form.get("response_format"), Some(&FormValue::Text("b64_json".to_string())));
    assert_eq!(form.get("n"), Some(&FormValue::Text("2".to_string())));

    match form.get("image") {
        Some(FormValue::File(part)) => {
            assert_eq!(part.filename(), "otter.png");
            assert_eq!(part.bytes(), &vec![1, 2, 3]);
            assert_eq!(part.mime().as_deref(), Some("image/png"));
        }
        other => panic!("expected image file part, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unset_optional_fields_are_left_out() -> Result<(), Box<dyn std::error::Error>> {
    let request = CreateImageVariationRequest::builder()
        .image(FilePart::new("otter.png", vec![1]))
        .build()?;

    assert_eq!(request.to_form().field_names(), vec!["image"]);
    Ok(())
}

#[test]
fn test_audio_forms() -> Result<(), Box<dyn std::error::Error>> {
    let transcription = CreateTranscriptionRequest::builder()
        .file(FilePart::new("clip.wav", vec![0u8; 4]))
        .model("whisper-1")
        .prompt("Anemo")
        .response_format(AudioResponseFormat::VerboseJson)
        .temperature(0.5)
        .language("en")
        .build()?;

    let form = transcription.to_form();
    assert_eq!(
        form.field_names(),
        vec!["file", "model", "prompt", "response_format", "temperature", "language"]
    );
    assert_eq!(form.get("temperature"), Some(&FormValue::Text("0.5".to_string())));
    assert_eq!(form.get("response_format"), Some(&FormValue::Text("verbose_json".to_string())));

    let translation =
        CreateTranslationRequest::new(FilePart::new("clip.wav", vec![0u8; 4]), "whisper-1");
    assert_eq!(translation.to_form().field_names(), vec!["file", "model"]);
    Ok(())
}

#[tokio::test]
async fn test_multipart_request_has_no_explicit_content_type()
-> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();
    mock.push_json(200, json!({"id": "file-1"}));

    let upload =
        UploadFileRequest::new(FilePart::new("train.jsonl", b"{}\n".to_vec()), "fine-tune");
    client.upload_file(&upload).await?;

    let request = mock.last_request().ok_or("no request recorded")?;
    assert!(header(&request, "content-type").is_none());
    assert_eq!(header(&request, "authorization"), Some("Bearer sk-test-key"));

    let form = request.body().as_form().ok_or("body was not multipart")?;
    assert_eq!(form, &upload.to_form());
    Ok(())
}

#[tokio::test]
async fn test_content_type_override_skipped_for_multipart()
-> Result<(), Box<dyn std::error::Error>> {
    let (client, mock) = mock_client();
    mock.push_json(200, json!({"id": "file-1"}));
    mock.push_json(200, json!({"object": "list", "data": []}));

    let client = client.with_options(
        RequestOptions::new()
            .header("Content-Type", "text/plain")
            .header("X-Trace", "abc"),
    );

    let upload =
        UploadFileRequest::new(FilePart::new("train.jsonl", b"{}\n".to_vec()), "fine-tune");
    client.upload_file(&upload).await?;

    let request = mock.last_request().ok_or("no request recorded")?;
    assert_eq!(request.headers().get_all("content-type").iter().count(), 0);
    assert_eq!(header(&request, "x-trace"), Some("abc"));

    client.list_files().await?;
    let request = mock.last_request().ok_or("no request recorded")?;
    assert_eq!(header(&request, "content-type"), Some("text/plain"));
    Ok(())
}

#[tokio::test]
async fn test_file_part_from_path_uses_file_name() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join(format!("anemo-upload-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("train.jsonl");
    std::fs::write(&path, b"{\"prompt\":\"a\"}\n")?;

    let part = FilePart::from_path(&path).await?;
    assert_eq!(part.filename(), "train.jsonl");
    assert_eq!(part.bytes(), &b"{\"prompt\":\"a\"}\n".to_vec());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[tokio::test]
async fn test_file_part_from_missing_path_is_io_error() {
    let err = FilePart::from_path("/definitely/not/here.png").await.unwrap_err();
    assert!(matches!(err.kind(), anemo_error::AnemoErrorKind::Io(_)));
}
