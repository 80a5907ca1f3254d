// Article classification: keyword/n-gram scoring over category corpora.
//
// Text flows through the tokenizer, gets matched (as unigrams, bigrams and
// trigrams) against each category's term union, and the normalized scores
// go through the decision policy to pick a single label.

pub mod category;
pub mod corpus;
pub mod decision;
pub mod keyword;
pub mod ngrams;
pub mod scorer;
pub mod tokenize;
pub mod traits;
