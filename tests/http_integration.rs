// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport using wiremock.

use std::time::Duration;

use tesytalk::command::{ResetPowerCommand, StatusCommand};
use tesytalk::protocol::{HttpClient, HttpConfig, Protocol};
use tesytalk::types::{HeaterState, Temperature};
use tesytalk::{Action, Device, Error, Outcome, runner};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn status_body() -> serde_json::Value {
    serde_json::json!({
        "heater_state": "READY",
        "gradus": "61.0",
        "ref_gradus": "70",
        "volume": "80",
        "watts": "2400",
        "date": "2018-08-12 20:00",
        "tz": "CEST",
        "mode": "1"
    })
}

fn calc_res_body() -> serde_json::Value {
    serde_json::json!({
        "sum": "1500",
        "resetDate": "2018-08-12 19:00:00",
        "watt": "2400"
    })
}

fn device_for(server: &MockServer) -> Device<HttpClient> {
    Device::http(server.address().to_string()).unwrap()
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn sends_get_to_status_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.uri()).unwrap();
        let response = client.send_command(&StatusCommand::Status).await.unwrap();

        assert!(response.body().contains("READY"));
    }

    #[tokio::test]
    async fn non_success_status_is_protocol_error() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/calcRes"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(mock_server.address().to_string()).unwrap();
        let err = client
            .send_command(&StatusCommand::PowerUsage)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn slow_device_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/resetPow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"err":"0"}"#)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(mock_server.address().to_string())
            .with_timeout(Duration::from_millis(100))
            .into_client()
            .unwrap();

        assert!(client.send_command(&ResetPowerCommand).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_device_is_protocol_error() {
        let device = Device::http("127.0.0.1:1").unwrap();
        let err = device.status().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }
}

// ============================================================================
// Device Tests
// ============================================================================

mod device {
    use super::*;

    #[tokio::test]
    async fn status_decodes_quoted_numbers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"heater_state":"READY","gradus":"61.0","ref_gradus": "70","volume":"80"}"#,
            ))
            .mount(&mock_server)
            .await;

        let status = device_for(&mock_server).status().await.unwrap();

        assert_eq!(status.heater_state, HeaterState::Ready);
        assert!((status.current_temperature - 61.0).abs() < f64::EPSILON);
        assert_eq!(status.tank_volume, 80);
    }

    #[tokio::test]
    async fn power_usage_decodes_counter() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/calcRes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calc_res_body()))
            .mount(&mock_server)
            .await;

        let usage = device_for(&mock_server).power_usage().await.unwrap();

        assert_eq!(usage.counter, 1500);
        assert_eq!(usage.watt_rating, 2400);
    }

    #[tokio::test]
    async fn device_info_ignores_unknown_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/devstat"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"devid":"foo FW15.2O","macaddr":"3:1:33:7","inetdev":"WIFI"}"#,
            ))
            .mount(&mock_server)
            .await;

        let info = device_for(&mock_server).device_info().await.unwrap();

        assert_eq!(info.device_id, "foo FW15.2O");
        assert_eq!(info.mac_address, "3:1:33:7");
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server).status().await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn reset_power_counter_success() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/resetPow"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"err": "0"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let ack = device_for(&mock_server).reset_power_counter().await.unwrap();
        assert!(ack.is_ok());
    }

    #[tokio::test]
    async fn reset_power_counter_refused() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/resetPow"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"err":"1"}"#))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server)
            .reset_power_counter()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Device(_)));
    }

    #[tokio::test]
    async fn set_temperature_sends_val() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/setTemp"))
            .and(query_param("val", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"stat": "ok"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let ack = device_for(&mock_server)
            .set_temperature(Temperature::new(12).unwrap())
            .await
            .unwrap();
        assert!(ack.is_ok());
    }

    #[tokio::test]
    async fn set_temperature_refused() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/setTemp"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"stat":"fail"}"#))
            .mount(&mock_server)
            .await;

        let err = device_for(&mock_server)
            .set_temperature(Temperature::MAX)
            .await
            .unwrap_err();
        assert!(err.to_string().contains(r#"(reply was: {"stat":"fail"})"#));
    }
}

// ============================================================================
// Runner Tests
// ============================================================================

mod runner_flow {
    use super::*;

    #[tokio::test]
    async fn temperature_bounds_reach_device() {
        let mock_server = MockServer::start().await;

        for value in ["1", "70"] {
            Mock::given(path("/setTemp"))
                .and(query_param("val", value))
                .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"stat":"ok"}"#))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let device = device_for(&mock_server);
        for value in [1, 70] {
            let action = Action::from_flags(false, Some(value), false).unwrap();
            assert_eq!(runner::run(&device, action).await.unwrap(), Outcome::Done);
        }
    }

    #[tokio::test]
    async fn verbose_report_end_to_end() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/devstat"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"devid":"foo FW15.2O","macaddr":"3:1:33:7","inetdev":"WIFI"}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(path("/calcRes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calc_res_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let device = device_for(&mock_server);
        let Outcome::Report(report) = runner::run(&device, Action::Status { verbose: true })
            .await
            .unwrap()
        else {
            panic!("expected a report");
        };

        assert_eq!(
            report.to_string(),
            "Heater state:        READY\n\
             Current temperature: 61.0\u{2103}/70.0\u{2103}\n\
             Power usage:         1.00 kWh since last reset (1.0 hours ago)\n\
             Heater capacity:     80 litres\n\
             DevID:               foo FW15.2O\n\
             MacAddr:             3:1:33:7\n\
             Watts:               2400\n"
        );
    }

    #[tokio::test]
    async fn failed_identity_skips_remaining_requests() {
        let mock_server = MockServer::start().await;

        Mock::given(path("/devstat"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(path("/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_body()))
            .expect(0)
            .mount(&mock_server)
            .await;
        Mock::given(path("/calcRes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calc_res_body()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let device = device_for(&mock_server);
        let err = runner::run(&device, Action::Status { verbose: true })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }
}
