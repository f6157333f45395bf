//! Testing utilities for SCOV workspace
//!
//! Shared scenario fixtures and artifact samples.

#![allow(missing_docs)]

use scov_core::Scenario;

pub fn scenario(title: &str) -> Scenario {
    Scenario::new(title)
}

pub fn scenarios(titles: &[&str]) -> Vec<Scenario> {
    titles.iter().map(|t| scenario(t)).collect()
}

pub fn titles(list: &[Scenario]) -> Vec<&str> {
    list.iter().map(Scenario::title).collect()
}

pub const SAMPLE_SOURCE_FEATURE: &str = r"@checkout
Feature: Checkout

  Background:
    Given a signed-in shopper

  Scenario: Pay with card
    When they pay with a valid card
    Then the order is confirmed

  @slow
  Scenario: Pay with voucher
    When they redeem a voucher
    Then the total is reduced

  Scenario: Abandon cart
    When they close the browser
    Then the cart is kept for 24 hours
";

pub const SAMPLE_QA_MARKDOWN: &str = r"# Checkout QA plan

## Scenario: Pay with card `@smoke`

- Open checkout
- Enter card 4111 1111 1111 1111
- Confirm order

## Pay with voucher

- Apply voucher SAVE10
- Check total

## Expired card is rejected

- Enter an expired card
- See an error
";
