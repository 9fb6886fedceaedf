// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use walletprobe::application::OnboardingJourney;
use walletprobe::driver::DriverError;
use walletprobe::pages::{CreateWalletPage, WalletManagementPage};
use walletprobe::utils::errors::{CheckError, ModelError};

use super::helpers::onboarding_world::{OnboardingWorld, BASE_URL, WORDS};

const PASSWORD: &str = "Sup3r-secret!";

#[tokio::test(start_paused = true)]
async fn test_journey_creates_wallet_and_saves_selection() {
    let (driver, base) = OnboardingWorld::default().build();

    let outcome = OnboardingJourney::new(base.clone(), PASSWORD)
        .run()
        .await
        .unwrap();

    assert_eq!(driver.visited(), vec![BASE_URL.to_string()]);
    assert_eq!(outcome.phrase.words(), WORDS.map(String::from).as_slice());
    assert_eq!(
        outcome.selection.titles(),
        vec!["Main Wallet", "Wallet 3", "Wallet 4"]
    );
    assert_eq!(outcome.subtitles, outcome.selection.titles());

    let wallets = WalletManagementPage::new(base.clone());
    assert!(driver.clicked(&wallets.switch_buttons().nth(2)));
    assert!(driver.clicked(&wallets.switch_buttons().nth(3)));
    assert!(!driver.clicked(&wallets.switch_buttons().nth(0)));
    assert!(driver.clicked(&wallets.save_button()));

    let create = CreateWalletPage::new(base);
    let typed = driver.typed();
    let phrase: Vec<&str> = typed
        .iter()
        .filter(|(query, _, _)| query == create.confirm_recovery_phrase_inputs().query())
        .map(|(_, _, value)| value.as_str())
        .collect();
    assert_eq!(phrase, WORDS.to_vec());

    let passwords = typed.iter().filter(|(_, _, value)| value == PASSWORD).count();
    assert_eq!(passwords, 2);
}

#[tokio::test(start_paused = true)]
async fn test_journey_detects_wrong_wallet_list() {
    let world = OnboardingWorld {
        subtitles: vec!["Main Wallet".to_string(), "Wallet 2".to_string()],
        ..Default::default()
    };
    let (_driver, base) = world.build();

    let err = OnboardingJourney::new(base, PASSWORD).run().await.unwrap_err();

    match err {
        CheckError::Model(ModelError::SelectionMismatch { expected, actual }) => {
            assert_eq!(expected, vec!["Main Wallet", "Wallet 3", "Wallet 4"]);
            assert_eq!(actual, vec!["Main Wallet", "Wallet 2"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_journey_fails_on_wrong_success_title() {
    let world = OnboardingWorld {
        success_title: "You're All Set!".to_string(),
        ..Default::default()
    };
    let (driver, base) = world.build();

    let err = OnboardingJourney::new(base.clone(), PASSWORD)
        .run()
        .await
        .unwrap_err();

    match err {
        CheckError::Assertion(failure) => {
            assert_eq!(failure.message, "Success page title does not match");
            assert_eq!(failure.actual, "\"You're All Set!\"");
        }
        other => panic!("unexpected error: {other}"),
    }
    let wallets = WalletManagementPage::new(base);
    assert!(!driver.clicked(&wallets.save_button()));
}

#[tokio::test(start_paused = true)]
async fn test_journey_stops_when_phrase_is_incomplete() {
    let world = OnboardingWorld {
        words: WORDS[..11].iter().map(|w| w.to_string()).collect(),
        ..Default::default()
    };
    let (driver, base) = world.build();

    let err = OnboardingJourney::new(base.clone(), PASSWORD)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, CheckError::Driver(DriverError::Timeout { .. })));
    let create = CreateWalletPage::new(base);
    assert!(!driver.clicked(&create.save_recovery_phrase_button()));
}
