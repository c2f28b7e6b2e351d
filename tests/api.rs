mod helpers;

use helpers::setup::spawn_app;
use practice_alarm_api_structs::dtos::ChannelStatus;
use practice_alarm_api_structs::*;
use practice_alarm_domain::{NotificationPermission, ID};
use serde_json::json;

fn two_sum() -> serde_json::Value {
    json!({
        "problemTitle": "Two Sum",
        "problemUrl": "https://leetcode.com/problems/two-sum",
        "problemDifficulty": "Easy",
        "scheduledTime": "09:00",
        "recurrence": ["monday", "Wednesday"]
    })
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let app = spawn_app().await;
    let res = app
        .client
        .get(format!("{}/api/v1/", app.address))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let body = res.json::<get_service_health::APIResponse>().await.unwrap();
    assert!(!body.message.is_empty());
}

#[actix_web::main]
#[test]
async fn test_rejects_requests_without_valid_token() {
    let app = spawn_app().await;
    let res = app
        .client
        .get(format!("{}/api/v1/alarms", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = app.get("/alarms", "garbage").send().await.unwrap();
    assert_eq!(res.status().as_u16(), 401);
}

#[actix_web::main]
#[test]
async fn test_crud_alarm() {
    let app = spawn_app().await;
    let token = app.token(&ID::default(), None);

    let res = app
        .post("/alarms", &token)
        .json(&two_sum())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 201);
    let alarm = res.json::<create_alarm::APIResponse>().await.unwrap().alarm;
    assert_eq!(alarm.problem_title, "Two Sum");
    assert_eq!(alarm.scheduled_time.to_string(), "09:00");
    assert_eq!(alarm.recurrence.day_names(), vec!["monday", "wednesday"]);
    assert!(alarm.is_active);
    assert!(alarm.last_triggered.is_none());

    let res = app
        .get(&format!("/alarms/{}", alarm.id), &token)
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let found = res.json::<get_alarm::APIResponse>().await.unwrap().alarm;
    assert_eq!(found.id, alarm.id);

    let res = app
        .put(&format!("/alarms/{}", alarm.id), &token)
        .json(&json!({ "isActive": false, "scheduledTime": "21:15" }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let updated = res.json::<update_alarm::APIResponse>().await.unwrap().alarm;
    assert!(!updated.is_active);
    assert_eq!(updated.scheduled_time.to_string(), "21:15");
    assert_eq!(updated.problem_title, "Two Sum");

    let res = app.get("/alarms", &token).send().await.unwrap();
    let alarms = res.json::<get_alarms::APIResponse>().await.unwrap().alarms;
    assert_eq!(alarms.len(), 1);

    let res = app
        .delete(&format!("/alarms/{}", alarm.id), &token)
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let res = app
        .get(&format!("/alarms/{}", alarm.id), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);
}

#[actix_web::main]
#[test]
async fn test_create_alarm_defaults_to_weekdays() {
    let app = spawn_app().await;
    let token = app.token(&ID::default(), None);

    let res = app
        .post("/alarms", &token)
        .json(&json!({
            "problemTitle": "Valid Parentheses",
            "problemUrl": "https://leetcode.com/problems/valid-parentheses",
            "scheduledTime": "07:05"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 201);
    let alarm = res.json::<create_alarm::APIResponse>().await.unwrap().alarm;
    assert_eq!(
        alarm.recurrence.day_names(),
        vec!["monday", "tuesday", "wednesday", "thursday", "friday"]
    );
    assert!(alarm.problem_difficulty.is_none());
}

#[actix_web::main]
#[test]
async fn test_create_alarm_rejects_invalid_input() {
    let app = spawn_app().await;
    let token = app.token(&ID::default(), None);

    let mut body = two_sum();
    body["scheduledTime"] = json!("25:00");
    let res = app.post("/alarms", &token).json(&body).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 400);

    let mut body = two_sum();
    body["recurrence"] = json!(["someday"]);
    let res = app.post("/alarms", &token).json(&body).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 400);

    let mut body = two_sum();
    body["recurrence"] = json!([]);
    let res = app.post("/alarms", &token).json(&body).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 400);
}

#[actix_web::main]
#[test]
async fn test_alarms_are_private() {
    let app = spawn_app().await;
    let owner = app.token(&ID::default(), None);
    let other = app.token(&ID::default(), None);

    let res = app
        .post("/alarms", &owner)
        .json(&two_sum())
        .send()
        .await
        .unwrap();
    let alarm = res.json::<create_alarm::APIResponse>().await.unwrap().alarm;

    let res = app
        .get(&format!("/alarms/{}", alarm.id), &other)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);

    let res = app.get("/alarms", &other).send().await.unwrap();
    let alarms = res.json::<get_alarms::APIResponse>().await.unwrap().alarms;
    assert!(alarms.is_empty());

    let res = app
        .delete(&format!("/alarms/{}", alarm.id), &other)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 404);
}

#[actix_web::main]
#[test]
async fn test_trigger_alarm() {
    let app = spawn_app().await;
    let token = app.token(&ID::default(), Some("me@example.com"));

    let mut body = two_sum();
    body["isActive"] = json!(false);
    let res = app.post("/alarms", &token).json(&body).send().await.unwrap();
    let alarm = res.json::<create_alarm::APIResponse>().await.unwrap().alarm;

    let res = app
        .post(&format!("/alarms/{}/trigger", alarm.id), &token)
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let body = res.json::<trigger_alarm::APIResponse>().await.unwrap();
    // No worker is registered so the notification is shown in the foreground
    assert_eq!(body.report.browser.status, ChannelStatus::Delivered);
    // The email api is not configured
    assert_eq!(body.report.email.status, ChannelStatus::Failed);
    assert!(body.report.email.reason.is_some());
    assert!(body.alarm.last_triggered.is_some());
    assert!(!body.alarm.is_active);

    let other = app.token(&ID::default(), None);
    let res = app
        .post(&format!("/alarms/{}/trigger", alarm.id), &other)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = app
        .post(&format!("/alarms/{}/trigger", ID::default()), &token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);
}

#[actix_web::main]
#[test]
async fn test_stats() {
    let app = spawn_app().await;
    let token = app.token(&ID::default(), None);

    for (difficulty, active) in [("Easy", true), ("HARD", true), ("", false)] {
        let mut body = two_sum();
        body["problemDifficulty"] = json!(difficulty);
        body["isActive"] = json!(active);
        let res = app.post("/alarms", &token).json(&body).send().await.unwrap();
        assert_eq!(res.status().as_u16(), 201);
    }

    let res = app.get("/stats", &token).send().await.unwrap();
    assert!(res.status().is_success());
    let stats = res.json::<get_stats::APIResponse>().await.unwrap().stats;
    assert_eq!(stats.total_alarms, 3);
    assert_eq!(stats.active_alarms, 2);
    assert_eq!(stats.difficulty.easy, 1);
    assert_eq!(stats.difficulty.hard, 1);
    assert_eq!(stats.difficulty.unrated, 1);
    assert_eq!(stats.weekly_schedule.len(), 7);
    assert_eq!(stats.weekly_schedule[0].day, "monday");
    assert_eq!(stats.weekly_schedule[0].active_alarms, 2);
    assert_eq!(stats.weekly_schedule[1].active_alarms, 0);
}

#[actix_web::main]
#[test]
async fn test_profile_email() {
    let app = spawn_app().await;
    let user_id = ID::default();
    let token = app.token(&user_id, None);

    let res = app.get("/me", &token).send().await.unwrap();
    let profile = res.json::<get_me::APIResponse>().await.unwrap().profile;
    assert_eq!(profile.user_id, user_id);
    assert!(profile.email.is_none());

    let res = app
        .put("/me", &token)
        .json(&json!({ "email": "me@example.com" }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let res = app.get("/me", &token).send().await.unwrap();
    let profile = res.json::<get_me::APIResponse>().await.unwrap().profile;
    assert_eq!(profile.email, Some("me@example.com".into()));

    let res = app
        .put("/me", &token)
        .json(&json!({ "email": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
}

#[actix_web::main]
#[test]
async fn test_session_controls_poller() {
    let app = spawn_app().await;
    let user_id = ID::default();
    let token = app.token(&user_id, Some("me@example.com"));

    let res = app.get("/session", &token).send().await.unwrap();
    let body = res.json::<get_session::APIResponse>().await.unwrap();
    assert!(body.session.is_none());
    assert!(!body.poller_running);

    let res = app
        .client
        .post(format!("{}/api/v1/session", app.address))
        .json(&json!({ "token": "garbage" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = app
        .client
        .post(format!("{}/api/v1/session", app.address))
        .json(&json!({ "token": token }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let body = res.json::<sign_in::APIResponse>().await.unwrap();
    assert_eq!(body.session.unwrap().user_id, user_id);
    assert!(body.poller_running);

    let res = app.get("/session", &token).send().await.unwrap();
    let body = res.json::<get_session::APIResponse>().await.unwrap();
    assert!(body.session.is_some());
    assert!(body.poller_running);

    let res = app.delete("/session", &token).send().await.unwrap();
    assert!(res.status().is_success());
    let body = res.json::<sign_out::APIResponse>().await.unwrap();
    assert!(body.session.is_none());
    assert!(!body.poller_running);
}

#[actix_web::main]
#[test]
async fn test_notification_permission() {
    let app = spawn_app().await;
    let token = app.token(&ID::default(), None);

    let res = app
        .get("/notifications/permission", &token)
        .send()
        .await
        .unwrap();
    let body = res
        .json::<get_notification_permission::APIResponse>()
        .await
        .unwrap();
    assert_eq!(body.permission, NotificationPermission::Granted);

    let res = app
        .put("/notifications/permission", &token)
        .json(&json!({ "permission": "denied" }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let res = app
        .get("/notifications/permission", &token)
        .send()
        .await
        .unwrap();
    let body = res
        .json::<get_notification_permission::APIResponse>()
        .await
        .unwrap();
    assert_eq!(body.permission, NotificationPermission::Denied);

    let res = app
        .put("/notifications/permission", &token)
        .json(&json!({ "permission": "maybe" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
}

#[actix_web::main]
#[test]
async fn test_session_belongs_to_signed_in_user() {
    let app = spawn_app().await;
    let owner = app.token(&ID::default(), Some("owner@example.com"));
    let stranger = app.token(&ID::default(), None);

    let res = app
        .client
        .post(format!("{}/api/v1/session", app.address))
        .json(&json!({ "token": owner }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let res = app.get("/session", &stranger).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = app.delete("/session", &stranger).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 401);

    let res = app.get("/session", &owner).send().await.unwrap();
    let body = res.json::<get_session::APIResponse>().await.unwrap();
    assert_eq!(body.session.unwrap().email, Some("owner@example.com".into()));
    assert!(body.poller_running);
}
