//! Sample Entities
//!
//! Four samples per entity: required fields only, a partial set, every
//! field, and a draft that has not been saved yet.

use chrono::{DateTime, Utc};
use entity_sync::{DisplayZone, Persisted};

use crate::models::*;

fn at(text: &str) -> Option<DateTime<Utc>> {
    DisplayZone::utc().from_form(text).unwrap()
}

pub mod family {
    use super::*;

    pub fn sample_with_required_data() -> Persisted<Family> {
        Persisted::new(
            29258,
            Family { name: Some("cap".into()), created_at: at("2025-07-11T04:19") },
        )
    }

    pub fn sample_with_partial_data() -> Persisted<Family> {
        Persisted::new(
            26308,
            Family { name: Some("morning".into()), created_at: at("2025-07-11T06:18") },
        )
    }

    pub fn sample_with_full_data() -> Persisted<Family> {
        Persisted::new(
            6784,
            Family { name: Some("pointless even".into()), created_at: at("2025-07-11T02:42") },
        )
    }

    pub fn sample_with_new_data() -> Family {
        Family { name: Some("cram brr who".into()), created_at: at("2025-07-10T16:51") }
    }
}

pub mod app_user {
    use super::*;

    pub fn sample_with_required_data() -> Persisted<AppUser> {
        Persisted::new(
            19407,
            AppUser {
                username: Some("nephew gah cutover".into()),
                name: Some("excepting only tasty".into()),
                xp_points: Some(2465),
                level: Some(27695),
                created_at: at("2025-07-10T23:28"),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_partial_data() -> Persisted<AppUser> {
        Persisted::new(
            30630,
            AppUser {
                username: Some("trivial valiantly".into()),
                name: Some("from".into()),
                avatar: Some("kindheartedly condense".into()),
                xp_points: Some(21180),
                level: Some(28915),
                created_at: at("2025-07-10T19:12"),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_full_data() -> Persisted<AppUser> {
        Persisted::new(
            1902,
            AppUser {
                username: Some("judgementally".into()),
                name: Some("wriggler insist".into()),
                avatar: Some("godfather whether remark".into()),
                xp_points: Some(23030),
                level: Some(28583),
                created_at: at("2025-07-11T09:36"),
                family: Some(super::family::sample_with_full_data()),
            },
        )
    }

    pub fn sample_with_new_data() -> AppUser {
        AppUser {
            username: Some("economise hepatitis what".into()),
            name: Some("likely whose".into()),
            xp_points: Some(10160),
            level: Some(16677),
            created_at: at("2025-07-11T10:12"),
            ..Default::default()
        }
    }
}

pub mod wallet {
    use super::*;

    pub fn sample_with_required_data() -> Persisted<Wallet> {
        Persisted::new(
            7414,
            Wallet {
                name: Some("brood hornet".into()),
                balance: Some(30502.0),
                wallet_type: Some(WalletType::Savings),
                created_at: at("2025-07-11T09:34"),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_partial_data() -> Persisted<Wallet> {
        Persisted::new(
            27165,
            Wallet {
                name: Some("customise upon scar".into()),
                balance: Some(30838.36),
                wallet_type: Some(WalletType::Personal),
                description: Some("duh".into()),
                created_at: at("2025-07-11T12:18"),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_full_data() -> Persisted<Wallet> {
        Persisted::new(
            10095,
            Wallet {
                name: Some("oof".into()),
                balance: Some(21889.38),
                wallet_type: Some(WalletType::Savings),
                icon: Some("whitewash anenst".into()),
                color: Some("violeta".into()),
                description: Some("past".into()),
                created_at: at("2025-07-10T19:50"),
                owner: Some(super::app_user::sample_with_required_data()),
            },
        )
    }

    pub fn sample_with_new_data() -> Wallet {
        Wallet {
            name: Some("unlike".into()),
            balance: Some(30167.59),
            wallet_type: Some(WalletType::Savings),
            created_at: at("2025-07-11T00:54"),
            ..Default::default()
        }
    }
}

pub mod goal {
    use super::*;

    pub fn sample_with_required_data() -> Persisted<Goal> {
        Persisted::new(
            3744,
            Goal {
                title: Some("obedience eek misread".into()),
                target_amount: Some(29144.39),
                current_amount: Some(22612.78),
                created_at: at("2025-07-11T04:40"),
                category: Some(GoalCategory::Potion),
                priority: Some(GoalPriority::High),
                alert_enabled: Some(true),
                alert_threshold: Some(13018),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_partial_data() -> Persisted<Goal> {
        Persisted::new(
            12155,
            Goal {
                title: Some("really fluctuate".into()),
                description: Some("aw".into()),
                target_amount: Some(23209.72),
                current_amount: Some(2969.33),
                created_at: at("2025-07-10T23:45"),
                due_date: at("2025-07-11T06:22"),
                category: Some(GoalCategory::Adventure),
                priority: Some(GoalPriority::High),
                alert_enabled: Some(true),
                alert_threshold: Some(27857),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_full_data() -> Persisted<Goal> {
        Persisted::new(
            13490,
            Goal {
                title: Some("aw tankful contractor".into()),
                description: Some("than and repeatedly".into()),
                target_amount: Some(20569.55),
                current_amount: Some(17010.36),
                created_at: at("2025-07-11T00:48"),
                due_date: at("2025-07-10T23:12"),
                category: Some(GoalCategory::Equipment),
                priority: Some(GoalPriority::Low),
                alert_enabled: Some(false),
                alert_threshold: Some(14298),
                family: Some(super::family::sample_with_required_data()),
            },
        )
    }

    pub fn sample_with_new_data() -> Goal {
        Goal {
            title: Some("notwithstanding at".into()),
            target_amount: Some(20732.27),
            current_amount: Some(19179.63),
            created_at: at("2025-07-11T11:30"),
            category: Some(GoalCategory::Other),
            priority: Some(GoalPriority::Medium),
            alert_enabled: Some(true),
            alert_threshold: Some(13732),
            ..Default::default()
        }
    }
}

pub mod daily_mission {
    use super::*;

    pub fn sample_with_required_data() -> Persisted<DailyMission> {
        Persisted::new(
            19220,
            DailyMission {
                title: Some("innovation until".into()),
                start_date: at("2025-07-11T04:43"),
                end_date: at("2025-07-10T16:11"),
                mission_type: Some(DailyMissionType::Investment),
                xp_reward: Some(4008),
                created_at: at("2025-07-10T15:00"),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_partial_data() -> Persisted<DailyMission> {
        Persisted::new(
            22745,
            DailyMission {
                title: Some("neatly afore".into()),
                start_date: at("2025-07-11T02:05"),
                end_date: at("2025-07-11T01:15"),
                mission_type: Some(DailyMissionType::Restriction),
                category: Some(GoalCategory::Equipment),
                xp_reward: Some(4385),
                created_at: at("2025-07-11T08:04"),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_full_data() -> Persisted<DailyMission> {
        Persisted::new(
            32346,
            DailyMission {
                title: Some("whoa delightfully".into()),
                description: Some("impartial shyly".into()),
                start_date: at("2025-07-11T06:06"),
                end_date: at("2025-07-10T17:30"),
                mission_type: Some(DailyMissionType::Tracking),
                target_amount: Some(9020.97),
                category: Some(GoalCategory::Upgrade),
                xp_reward: Some(26354),
                created_at: at("2025-07-11T00:23"),
                family: Some(super::family::sample_with_partial_data()),
            },
        )
    }

    pub fn sample_with_new_data() -> DailyMission {
        DailyMission {
            title: Some("but".into()),
            start_date: at("2025-07-10T16:41"),
            end_date: at("2025-07-11T11:44"),
            mission_type: Some(DailyMissionType::Saving),
            xp_reward: Some(3075),
            created_at: at("2025-07-11T00:51"),
            ..Default::default()
        }
    }
}

pub mod mission_status_record {
    use super::*;

    pub fn sample_with_required_data() -> Persisted<MissionStatusRecord> {
        Persisted::new(
            6868,
            MissionStatusRecord {
                date: at("2025-07-11T01:23"),
                status_type: Some(MissionStatusType::Failed),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_partial_data() -> Persisted<MissionStatusRecord> {
        Persisted::new(
            27051,
            MissionStatusRecord {
                date: at("2025-07-10T16:06"),
                status_type: Some(MissionStatusType::Failed),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_full_data() -> Persisted<MissionStatusRecord> {
        Persisted::new(
            3094,
            MissionStatusRecord {
                date: at("2025-07-11T03:32"),
                status_type: Some(MissionStatusType::Completed),
                mission: Some(super::daily_mission::sample_with_required_data()),
            },
        )
    }

    pub fn sample_with_new_data() -> MissionStatusRecord {
        MissionStatusRecord {
            date: at("2025-07-10T19:27"),
            status_type: Some(MissionStatusType::Failed),
            ..Default::default()
        }
    }
}

pub mod transaction {
    use super::*;

    pub fn sample_with_required_data() -> Persisted<Transaction> {
        Persisted::new(
            5120,
            Transaction {
                amount: Some(1250.0),
                description: Some("allowance".into()),
                transaction_type: Some(TransactionType::Income),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_partial_data() -> Persisted<Transaction> {
        Persisted::new(
            8821,
            Transaction {
                amount: Some(89.9),
                description: Some("groceries".into()),
                transaction_date: at("2025-07-11T08:15"),
                transaction_type: Some(TransactionType::Expense),
                category: Some("food".into()),
                ..Default::default()
            },
        )
    }

    pub fn sample_with_full_data() -> Persisted<Transaction> {
        Persisted::new(
            14003,
            Transaction {
                amount: Some(430.5),
                description: Some("bike repair".into()),
                transaction_date: at("2025-07-10T18:40"),
                transaction_type: Some(TransactionType::Expense),
                category: Some("transport".into()),
                notes: Some("new chain".into()),
                wallet: Some(super::wallet::sample_with_required_data()),
            },
        )
    }

    pub fn sample_with_new_data() -> Transaction {
        Transaction {
            amount: Some(300.0),
            description: Some("birthday gift".into()),
            transaction_type: Some(TransactionType::Income),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_sync::{EntityForm, Record};
    use serde_json::{json, Value};

    use crate::admin::AdminEntity;

    /// Wire decode, draft encoding and the form adapter for one entity's samples
    fn check_samples<T: AdminEntity>(persisted: [Persisted<T>; 3], draft: T) {
        let now = at("2025-07-11T12:00").unwrap();

        for entity in persisted {
            let wire = serde_json::to_value(&entity).unwrap();
            assert_eq!(wire["id"], json!(entity.id), "{}", T::NAME);
            let decoded: Persisted<T> = serde_json::from_value(wire).unwrap();
            assert_eq!(decoded, entity, "{} wire round trip", T::NAME);

            let record = Record::from(entity);
            let form = EntityForm::create_in(Some(&record), now, DisplayZone::utc());
            assert_eq!(form.extract().unwrap(), record, "{} form round trip", T::NAME);
        }

        let wire = serde_json::to_value(Record::Draft(draft.clone())).unwrap();
        assert_eq!(wire["id"], Value::Null, "{} draft id", T::NAME);

        let form = EntityForm::create_in(Some(&Record::Draft(draft)), now, DisplayZone::utc());
        let extracted = form.extract().unwrap();
        assert!(extracted.is_new());
        let extracted = serde_json::to_value(extracted.data()).unwrap();
        let filled = wire
            .as_object()
            .unwrap()
            .iter()
            .filter(|(field, value)| field.as_str() != "id" && !value.is_null());
        for (field, value) in filled {
            assert_eq!(&extracted[field], value, "{} draft field {}", T::NAME, field);
        }
    }

    #[test]
    fn test_every_entity_round_trips_its_samples() {
        check_samples(
            [
                family::sample_with_required_data(),
                family::sample_with_partial_data(),
                family::sample_with_full_data(),
            ],
            family::sample_with_new_data(),
        );
        check_samples(
            [
                app_user::sample_with_required_data(),
                app_user::sample_with_partial_data(),
                app_user::sample_with_full_data(),
            ],
            app_user::sample_with_new_data(),
        );
        check_samples(
            [
                wallet::sample_with_required_data(),
                wallet::sample_with_partial_data(),
                wallet::sample_with_full_data(),
            ],
            wallet::sample_with_new_data(),
        );
        check_samples(
            [
                goal::sample_with_required_data(),
                goal::sample_with_partial_data(),
                goal::sample_with_full_data(),
            ],
            goal::sample_with_new_data(),
        );
        check_samples(
            [
                daily_mission::sample_with_required_data(),
                daily_mission::sample_with_partial_data(),
                daily_mission::sample_with_full_data(),
            ],
            daily_mission::sample_with_new_data(),
        );
        check_samples(
            [
                mission_status_record::sample_with_required_data(),
                mission_status_record::sample_with_partial_data(),
                mission_status_record::sample_with_full_data(),
            ],
            mission_status_record::sample_with_new_data(),
        );
        check_samples(
            [
                transaction::sample_with_required_data(),
                transaction::sample_with_partial_data(),
                transaction::sample_with_full_data(),
            ],
            transaction::sample_with_new_data(),
        );
    }

    #[test]
    fn test_renamed_and_nested_wire_fields() {
        let wallet = serde_json::to_value(wallet::sample_with_full_data()).unwrap();
        assert!(wallet.get("type").is_some());
        assert!(wallet.get("walletType").is_none());

        let mission = serde_json::to_value(daily_mission::sample_with_full_data()).unwrap();
        assert_eq!(mission["type"], json!("TRACKING"));
        assert_eq!(mission["startDate"], json!("2025-07-11T06:06:00.000Z"));
        assert_eq!(mission["endDate"], json!("2025-07-10T17:30:00.000Z"));
        assert_eq!(mission["createdAt"], json!("2025-07-11T00:23:00.000Z"));
        assert_eq!(mission["family"]["id"], json!(family::sample_with_partial_data().id));

        let record = serde_json::to_value(mission_status_record::sample_with_full_data()).unwrap();
        assert_eq!(record["mission"]["id"], json!(19220));
        assert_eq!(record["mission"]["type"], json!("INVESTMENT"));

        let transaction = serde_json::to_value(transaction::sample_with_full_data()).unwrap();
        assert_eq!(transaction["type"], json!("EXPENSE"));
        assert_eq!(transaction["wallet"]["id"], json!(wallet::sample_with_required_data().id));
        assert_eq!(transaction["transactionDate"], json!("2025-07-10T18:40:00.000Z"));
    }
}
