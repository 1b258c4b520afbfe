use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web/dist"]
struct WebAssets;

/// Serve the embedded single-page form
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Try exact path first
    if let Some(content) = <WebAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // Serve index.html for any unmatched route
    if let Some(content) = <WebAssets as Embed>::get("index.html") {
        return Html(String::from_utf8_lossy(&content.data).to_string()).into_response();
    }

    // Fallback: a plain version of the form if no assets are embedded
    Html(FALLBACK_HTML.to_string()).into_response()
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nepali Sentiment Analysis</title>
    <style>
        body { font-family: sans-serif; max-width: 640px; margin: 40px auto; padding: 0 16px; }
        textarea { width: 100%; font-size: 16px; padding: 8px; }
        select, button { font-size: 16px; padding: 6px 12px; margin: 8px 0; }
        .sentiment-positive { color: #16a34a; font-weight: 600; }
        .sentiment-negative { color: #dc2626; font-weight: 600; }
        .sentiment-unknown { color: #64748b; font-weight: 600; }
    </style>
</head>
<body>
    <h1>Nepali Sentiment Analysis</h1>
    <p id="dataset-info"></p>

    <label for="model">Choose a Model:</label><br>
    <select id="model"></select><br>

    <label for="text">Enter Nepali Text</label><br>
    <textarea id="text" rows="5"></textarea><br>

    <button id="predict-btn">Predict Sentiment</button>
    <p id="result"></p>

    <script>
        const EMOJI = { positive: '\u{1F60A}', negative: '\u{1F61E}', unknown: '\u{1F914}' };

        async function init() {
            const info = await fetch('/api/models').then(r => r.json());
            const select = document.getElementById('model');
            for (const m of info.models) {
                const opt = document.createElement('option');
                opt.value = m.id;
                opt.textContent = m.label;
                select.appendChild(opt);
            }
            document.getElementById('text').value = info.default_text;
            document.getElementById('dataset-info').textContent =
                `Positive Sentences: ${info.dataset.positive_sentences} | Negative Sentences: ${info.dataset.negative_sentences}`;
        }

        async function predict() {
            const result = document.getElementById('result');
            const body = {
                text: document.getElementById('text').value,
                model: document.getElementById('model').value
            };

            try {
                const res = await fetch('/api/predict', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(body)
                });
                if (!res.ok) {
                    const err = await res.json().catch(() => ({}));
                    result.className = 'sentiment-unknown';
                    result.textContent = 'Prediction failed: ' + (err.error || res.status);
                    return;
                }
                const p = await res.json();
                result.className = 'sentiment-' + p.display_class;
                result.textContent = `Predicted Sentiment: ${p.display_text} ${EMOJI[p.display_class] || ''}`;
            } catch (err) {
                result.className = 'sentiment-unknown';
                result.textContent = 'Prediction failed: ' + err.message;
            }
        }

        document.getElementById('predict-btn').addEventListener('click', predict);
        init();
    </script>
</body>
</html>
"#;
