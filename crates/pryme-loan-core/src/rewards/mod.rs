pub mod card_rewards;
