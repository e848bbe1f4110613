pub mod wizardry;
