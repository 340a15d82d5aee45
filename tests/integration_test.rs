use finsight::{
    AnalysisClient, BusinessType, ClientConfig, Language, SelectedFile, StatementAnalyzer,
    UploadError, UploadRequest, LOCAL_BACKEND_ADDR,
};
use anyhow::Result;
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

const REPORT_JSON: &str = r#"{
    "metrics": {
        "score": 82,
        "readiness": "High",
        "total_revenue": 250000,
        "total_expenses": 180000,
        "net_cash_flow": 70000,
        "debt_obligations": 12000,
        "tax_compliance": "Tax Payments Detected",
        "risks": [],
        "monthly_trend": [
            {"date": "2025-01-31", "credit": 120000, "debit": 90000, "net_cash_flow": 30000},
            {"date": "2025-02-28", "credit": 130000, "debit": 90000, "net_cash_flow": 40000}
        ],
        "business_type": "Retail"
    },
    "insights": "Cash flow is healthy."
}"#;

/// Serves exactly one canned HTTP response and returns the raw request it received.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut request = Vec::new();
        let mut content_length = None;
        let mut chunked = false;

        // Headers
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            request.extend_from_slice(line.as_bytes());
            let lower = line.to_ascii_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse::<usize>().ok();
            }
            if lower.starts_with("transfer-encoding:") && lower.contains("chunked") {
                chunked = true;
            }
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }

        // Body
        if let Some(length) = content_length {
            let mut body = vec![0u8; length];
            reader.read_exact(&mut body).unwrap();
            request.extend_from_slice(&body);
        } else if chunked {
            while !request.ends_with(b"\r\n0\r\n\r\n") {
                let mut line = Vec::new();
                if reader.read_until(b'\n', &mut line).unwrap() == 0 {
                    break;
                }
                request.extend_from_slice(&line);
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base, handle)
}

fn write_statement(name: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, "Date,Description,Credit,Debit\n2025-01-05,Sale,1000,0\n").unwrap();
    path
}

fn request_for(path: PathBuf, business_type: BusinessType, language: Language) -> UploadRequest {
    UploadRequest {
        file: SelectedFile::new(path),
        business_type,
        language,
    }
}

#[test]
fn test_successful_analysis_returns_report() -> Result<()> {
    let (base, server) = serve_once("HTTP/1.1 200 OK", REPORT_JSON);
    let path = write_statement("finsight_success_statement.csv");

    let client = AnalysisClient::new(ClientConfig::new(base))?;
    let report = client.analyze(&request_for(path.clone(), BusinessType::Retail, Language::English))?;
    server.join().unwrap();

    assert_eq!(report.metrics.score, 82.0);
    assert_eq!(report.metrics.readiness, "High");
    assert_eq!(report.metrics.total_revenue, 250000.0);
    assert_eq!(report.metrics.debt_obligations, Some(12000.0));
    assert_eq!(report.metrics.monthly_trend.len(), 2);
    assert_eq!(report.metrics.monthly_trend[1].month_label(), "Feb");
    assert_eq!(report.insights, "Cash flow is healthy.");

    let _ = fs::remove_file(path);
    Ok(())
}

#[test]
fn test_request_carries_file_and_form_fields() -> Result<()> {
    let (base, server) = serve_once("HTTP/1.1 200 OK", REPORT_JSON);
    let path = write_statement("finsight_fields_statement.csv");

    let client = AnalysisClient::new(ClientConfig::new(format!("{}/", base)))?;
    client.analyze(&request_for(path.clone(), BusinessType::Logistics, Language::Hindi))?;
    let raw = String::from_utf8_lossy(&server.join().unwrap()).into_owned();

    assert!(raw.starts_with("POST /analyze-file HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("content-type: multipart/form-data"));
    assert!(raw.contains(r#"name="file"; filename="finsight_fields_statement.csv""#));
    assert!(raw.contains("2025-01-05,Sale,1000,0"));
    assert!(raw.contains(r#"name="business_type""#));
    assert!(raw.contains("Logistics"));
    assert!(raw.contains(r#"name="language""#));
    assert!(raw.contains("Hindi"));

    let _ = fs::remove_file(path);
    Ok(())
}

#[test]
fn test_server_detail_reaches_user_message() -> Result<()> {
    let (base, server) = serve_once(
        "HTTP/1.1 400 Bad Request",
        r#"{"detail": "Unsupported file format"}"#,
    );
    let path = write_statement("finsight_detail_statement.csv");

    let client = AnalysisClient::new(ClientConfig::new(base))?;
    let err = client
        .analyze(&request_for(path.clone(), BusinessType::Retail, Language::English))
        .unwrap_err();
    server.join().unwrap();

    match &err {
        UploadError::Server { status, detail } => {
            assert_eq!(*status, 400);
            assert_eq!(detail, "Unsupported file format");
        }
        other => panic!("expected server error, got {:?}", other),
    }
    assert_eq!(
        err.user_message(),
        "Error: Server responded with 400: Unsupported file format. Check if backend (127.0.0.1:8000) is running."
    );

    let _ = fs::remove_file(path);
    Ok(())
}

#[test]
fn test_non_json_error_falls_back_to_status_text() -> Result<()> {
    let (base, server) = serve_once("HTTP/1.1 500 Internal Server Error", "boom");
    let path = write_statement("finsight_plain_error_statement.csv");

    let client = AnalysisClient::new(ClientConfig::new(base))?;
    let err = client
        .analyze(&request_for(path.clone(), BusinessType::Other, Language::English))
        .unwrap_err();
    server.join().unwrap();

    assert!(err
        .user_message()
        .contains("Server responded with 500: Internal Server Error"));

    let _ = fs::remove_file(path);
    Ok(())
}

#[test]
fn test_unreachable_backend_is_a_network_error() -> Result<()> {
    // Bind then drop to get a port nobody listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };
    let path = write_statement("finsight_unreachable_statement.csv");

    let client = AnalysisClient::new(ClientConfig::new(format!("http://127.0.0.1:{}", port)))?;
    let err = client
        .analyze(&request_for(path.clone(), BusinessType::Retail, Language::English))
        .unwrap_err();

    assert!(matches!(err, UploadError::Network(_)));
    let message = err.user_message();
    assert!(message.starts_with("Error: "));
    assert!(message.contains(LOCAL_BACKEND_ADDR));

    let _ = fs::remove_file(path);
    Ok(())
}

#[test]
fn test_missing_file_fails_before_any_request() -> Result<()> {
    let path = env::temp_dir().join("finsight_does_not_exist.csv");
    let _ = fs::remove_file(&path);

    // Nothing listens here; an Io error proves the request was never sent
    let client = AnalysisClient::new(ClientConfig::new("http://127.0.0.1:9"))?;
    let err = client
        .analyze(&request_for(path, BusinessType::Retail, Language::English))
        .unwrap_err();

    assert!(matches!(err, UploadError::Io { .. }));
    assert!(err.user_message().contains("finsight_does_not_exist.csv"));
    Ok(())
}
